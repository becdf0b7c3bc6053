//! **gridnav-core** — geometry primitives shared by the *gridnav* crates.
//!
//! [`Point`] addresses a grid cell (and doubles as a width/height pair), and
//! [`Range`] describes the half-open rectangle a navigator works over.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
