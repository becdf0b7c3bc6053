//! Public path queries and the completion-callback slot.

use gridnav_core::Point;
use log::debug;

use crate::navigator::GridNavigator;

impl<N, S> GridNavigator<N, S>
where
    N: Fn(i32, i32) -> bool,
    S: Fn(i32, i32, i32, i32) -> bool,
{
    /// Set the completion callback used by [`find_path`](Self::find_path).
    ///
    /// There is a single slot: assigning again replaces the previous callback.
    pub fn set_on_complete(&mut self, on_complete: impl FnMut(bool) + 'static) {
        self.on_complete = Some(Box::new(on_complete));
    }

    /// Remove the completion callback.
    pub fn clear_on_complete(&mut self) {
        self.on_complete = None;
    }

    /// Search for a path and report the outcome to the completion callback.
    ///
    /// Despite the callback, the search is fully synchronous: the callback
    /// runs exactly once, on the caller's stack, before this returns. Without
    /// a callback the outcome is only visible through the path accessors.
    pub fn find_path(&mut self, start: Point, end: Point) {
        let found = self.search(start, end);
        match self.on_complete.as_mut() {
            Some(on_complete) => on_complete(found),
            None => debug!(
                "find_path {} -> {} finished without a completion callback (found: {})",
                start, end, found
            ),
        }
    }

    /// [`find_path`](Self::find_path) taking plain coordinates.
    pub fn find_path_xy(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32) {
        self.find_path(Point::new(start_x, start_y), Point::new(end_x, end_y));
    }

    /// Search for a path and return whether one was found.
    ///
    /// On success the path is available through [`path`](Self::path) and
    /// friends; on failure the path is empty. A goal equal to the start is
    /// reported as no path.
    pub fn find_path_synchronous(&mut self, start: Point, end: Point) -> bool {
        self.search(start, end)
    }

    /// [`find_path_synchronous`](Self::find_path_synchronous) taking plain
    /// coordinates.
    pub fn find_path_synchronous_xy(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> bool {
        self.find_path_synchronous(Point::new(start_x, start_y), Point::new(end_x, end_y))
    }

    fn search(&mut self, start: Point, end: Point) -> bool {
        self.path.clear();
        self.reset_field();

        let Some(si) = self.rng.index_of(start) else {
            debug!("path {} -> {}: start outside {}", start, end, self.rng);
            return false;
        };
        // The start is seeded even when the node predicate rejects it.
        self.field[si].visited = 0;
        self.flood(si);

        // Strictly positive: a goal equal to the start is not a path.
        if !self.node_ok(end) || self.distance_at(end) <= 0 {
            debug!("path {} -> {}: goal unreachable", start, end);
            return false;
        }

        let found = self.reconstruct(end);
        debug!(
            "path {} -> {}: found {} ({} points)",
            start,
            end,
            found,
            self.path.len()
        );
        found
    }
}
