//! Backward walk from the goal through the distance field.

use gridnav_core::Point;
use log::{trace, warn};

use crate::distance::euclidean_sq;
use crate::navigator::GridNavigator;

impl<N, S> GridNavigator<N, S>
where
    N: Fn(i32, i32) -> bool,
    S: Fn(i32, i32, i32, i32) -> bool,
{
    /// Rebuild `self.path` from the start to `goal`.
    ///
    /// Each backward step picks, among the valid neighbours one layer closer
    /// to the start, the one nearest (Euclidean) to `goal` itself rather than
    /// to the current cell. The first candidate in up (`+y`), right, down,
    /// left order wins ties.
    ///
    /// `goal` must hold a positive distance. Returns `false` (and leaves the
    /// path empty) if some layer offers no candidate, which only happens when
    /// a predicate changed its answers mid-query.
    pub(crate) fn reconstruct(&mut self, goal: Point) -> bool {
        self.path.clear();
        let goal_dist = self.distance_at(goal);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut current = goal;
        self.path.push(goal);

        for step in (0..goal_dist).rev() {
            let cands = nbuf.cardinal(current, |n| {
                self.distance_at(n) == step && self.node_ok(n) && self.step_ok(n, current)
            });

            let mut best: Option<(Point, u128)> = None;
            for &c in cands {
                let d = euclidean_sq(c, goal);
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((c, d));
                }
            }

            let Some((prev, _)) = best else {
                warn!(
                    "no predecessor for {} at distance {}; predicates changed during the query",
                    current, step
                );
                self.path.clear();
                self.nbuf = nbuf;
                return false;
            };
            trace!("step {}: {} <- {}", step, current, prev);
            self.path.push(prev);
            current = prev;
        }

        self.nbuf = nbuf;
        self.path.reverse();
        true
    }
}
