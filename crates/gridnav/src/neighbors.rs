use gridnav_core::Point;

/// Reusable buffer for orthogonal neighbour enumeration.
///
/// Neighbours come out in [`Point::DIRS_4`] order (up is `+y`), which is the
/// order reconstruction relies on to break ties.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbours of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
