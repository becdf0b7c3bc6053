//! Breadth-first shortest-path navigation on 2D grids.
//!
//! [`GridNavigator`] floods a distance field outward from a start cell and
//! walks it backward from the goal to produce a shortest orthogonal path:
//!
//! - **Node validity**: a caller predicate `Fn(x, y) -> bool` decides which
//!   cells may be entered. It is consulted on demand and never cached.
//! - **Step validity**: an optional predicate `Fn(from_x, from_y, to_x, to_y)`
//!   vetoes individual edges, e.g. a wall segment between two open cells.
//! - **Tie-breaking**: among equally short predecessors, reconstruction picks
//!   the one closest (Euclidean) to the *goal*, which keeps paths hugging the
//!   straight line towards it. Remaining ties go to the first candidate in
//!   up, right, down, left order, where up is `+y` (the y axis grows up).
//!
//! Queries are synchronous. [`GridNavigator::find_path`] reports through a
//! single completion-callback slot, [`GridNavigator::find_path_synchronous`]
//! returns the outcome directly.
//!
//! ```
//! use gridnav::{GridNavigator, Point};
//!
//! let mut nav = GridNavigator::new(3, 3, |x, y| (x, y) != (1, 1)).unwrap();
//! assert!(nav.find_path_synchronous(Point::new(0, 0), Point::new(2, 2)));
//! assert_eq!(nav.path_len(), 5);
//! assert!(!nav.path().contains(&Point::new(1, 1)));
//! ```

mod config;
mod distance;
mod error;
mod flood;
mod navigator;
mod neighbors;
mod query;
mod reconstruct;

pub use config::{FloodStrategy, NavigatorConfig};
pub use distance::{euclidean_sq, manhattan};
pub use error::NavError;
pub use gridnav_core::{Point, Range};
pub use navigator::{GridNavigator, NOT_VISITED, StepFn, VisitedNode};
pub use neighbors::Neighbors;
