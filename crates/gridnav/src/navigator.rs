use std::collections::VecDeque;
use std::fmt;

use gridnav_core::{Point, Range};

use crate::config::NavigatorConfig;
use crate::error::NavError;
use crate::neighbors::Neighbors;

/// Sentinel distance meaning "not reached" in the distance field.
pub const NOT_VISITED: i32 = -1;

/// Default step predicate type, used when no step predicate is attached.
pub type StepFn = fn(i32, i32, i32, i32) -> bool;

/// One cell of the distance field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitedNode {
    pub pos: Point,
    /// Steps from the start cell, or [`NOT_VISITED`].
    pub visited: i32,
}

// ---------------------------------------------------------------------------
// GridNavigator
// ---------------------------------------------------------------------------

/// Breadth-first path navigator over a `width x height` grid.
///
/// The navigator owns its scratch state (distance field, path buffer, flood
/// queue) and rebuilds it from scratch on every query, so one instance can
/// serve any number of queries. Queries take `&mut self`: one at a time.
///
/// `N` is the node predicate `Fn(x, y) -> bool`; `S` the optional step
/// predicate `Fn(from_x, from_y, to_x, to_y) -> bool`.
pub struct GridNavigator<N, S = StepFn> {
    pub(crate) rng: Range,
    pub(crate) node_is_valid: N,
    pub(crate) step_is_valid: Option<S>,
    pub(crate) config: NavigatorConfig,
    // Per-query scratch, allocated by the first query.
    pub(crate) field: Vec<VisitedNode>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) path: Vec<Point>,
    pub(crate) nbuf: Neighbors,
    pub(crate) on_complete: Option<Box<dyn FnMut(bool)>>,
}

impl<N> GridNavigator<N, StepFn>
where
    N: Fn(i32, i32) -> bool,
{
    /// Create a navigator for a `width x height` grid.
    ///
    /// Fails with [`NavError::NegativeDimension`] if either side is negative.
    pub fn new(width: i32, height: i32, node_is_valid: N) -> Result<Self, NavError> {
        Self::from_size(Point::new(width, height), node_is_valid)
    }

    /// Create a navigator from a combined size (`x` = width, `y` = height).
    pub fn from_size(size: Point, node_is_valid: N) -> Result<Self, NavError> {
        if size.x < 0 || size.y < 0 {
            return Err(NavError::NegativeDimension {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            rng: Range::from_size(size),
            node_is_valid,
            step_is_valid: None,
            config: NavigatorConfig::default(),
            field: Vec::new(),
            queue: VecDeque::new(),
            path: Vec::new(),
            nbuf: Neighbors::new(),
            on_complete: None,
        })
    }
}

impl<N, S> GridNavigator<N, S>
where
    N: Fn(i32, i32) -> bool,
    S: Fn(i32, i32, i32, i32) -> bool,
{
    /// Attach a step predicate, replacing any previous one.
    ///
    /// Whether it is consulted depends on
    /// [`NavigatorConfig::honor_step_predicate`].
    pub fn with_step_predicate<S2>(self, step_is_valid: S2) -> GridNavigator<N, S2>
    where
        S2: Fn(i32, i32, i32, i32) -> bool,
    {
        GridNavigator {
            rng: self.rng,
            node_is_valid: self.node_is_valid,
            step_is_valid: Some(step_is_valid),
            config: self.config,
            field: self.field,
            queue: self.queue,
            path: self.path,
            nbuf: self.nbuf,
            on_complete: self.on_complete,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// The grid rectangle, always anchored at (0, 0).
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Grid size as a `Point` (`x` = width, `y` = height).
    #[inline]
    pub fn size(&self) -> Point {
        self.rng.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    // -----------------------------------------------------------------------
    // Path accessors
    // -----------------------------------------------------------------------

    /// Number of points in the most recent path (0 if none was found).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Whether the most recent query left no path.
    #[inline]
    pub fn is_path_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The most recent path, start first, goal last.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Point `index` of the most recent path.
    pub fn path_point(&self, index: usize) -> Result<Point, NavError> {
        self.path
            .get(index)
            .copied()
            .ok_or(NavError::IndexOutOfRange {
                index,
                len: self.path.len(),
            })
    }

    // -----------------------------------------------------------------------
    // Distance field accessors
    // -----------------------------------------------------------------------

    /// Distance from the last query's start to `p`.
    ///
    /// Returns [`NOT_VISITED`] if `p` is out of bounds, was not reached, or
    /// no query has run yet.
    pub fn distance_at(&self, p: Point) -> i32 {
        self.rng
            .index_of(p)
            .and_then(|i| self.field.get(i))
            .map_or(NOT_VISITED, |n| n.visited)
    }

    /// The whole distance field in row-major order. Empty before the first
    /// query.
    #[inline]
    pub fn distance_field(&self) -> &[VisitedNode] {
        &self.field
    }

    // -----------------------------------------------------------------------
    // Predicate helpers
    // -----------------------------------------------------------------------

    /// In bounds and accepted by the node predicate.
    #[inline]
    pub(crate) fn node_ok(&self, p: Point) -> bool {
        self.rng.contains(p) && (self.node_is_valid)(p.x, p.y)
    }

    /// Whether moving `from` → `to` is allowed by the step predicate.
    #[inline]
    pub(crate) fn step_ok(&self, from: Point, to: Point) -> bool {
        if !self.config.honor_step_predicate {
            return true;
        }
        match &self.step_is_valid {
            Some(step) => step(from.x, from.y, to.x, to.y),
            None => true,
        }
    }

    /// Reset every cell to [`NOT_VISITED`], allocating on first use.
    pub(crate) fn reset_field(&mut self) {
        let len = self.rng.len();
        if self.field.len() != len {
            let rng = self.rng;
            self.field.clear();
            self.field.extend(rng.iter().map(|pos| VisitedNode {
                pos,
                visited: NOT_VISITED,
            }));
            return;
        }
        for n in self.field.iter_mut() {
            n.visited = NOT_VISITED;
        }
    }
}

impl<N, S> fmt::Debug for GridNavigator<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridNavigator")
            .field("range", &self.rng)
            .field("config", &self.config)
            .field("has_step_predicate", &self.step_is_valid.is_some())
            .field("has_on_complete", &self.on_complete.is_some())
            .field("path_len", &self.path.len())
            .finish()
    }
}
