//! Breadth-first flood fill of the distance field.

use log::trace;

use crate::config::FloodStrategy;
use crate::navigator::{GridNavigator, NOT_VISITED};

impl<N, S> GridNavigator<N, S>
where
    N: Fn(i32, i32) -> bool,
    S: Fn(i32, i32, i32, i32) -> bool,
{
    /// Flood the distance field outward from the cell at `start_idx`, which
    /// must already hold distance 0.
    ///
    /// A cell expands only if it is itself valid, so an invalid start keeps
    /// its 0 but reaches nothing. A neighbour is claimed when it is in
    /// bounds, valid, unvisited, and the step towards it is allowed.
    pub(crate) fn flood(&mut self, start_idx: usize) {
        match self.config.strategy {
            FloodStrategy::Queue => self.flood_queue(start_idx),
            FloodStrategy::LayerScan => self.flood_layers(),
        }
    }

    fn flood_queue(&mut self, start_idx: usize) {
        self.queue.clear();
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            let cp = self.field[ci].pos;
            if !(self.node_is_valid)(cp.x, cp.y) {
                continue;
            }
            let next = self.field[ci].visited + 1;

            for &np in nbuf.cardinal(cp, |n| self.node_ok(n)) {
                let Some(ni) = self.rng.index_of(np) else {
                    continue;
                };
                if self.field[ni].visited != NOT_VISITED {
                    continue;
                }
                if !self.step_ok(cp, np) {
                    continue;
                }
                self.field[ni].visited = next;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
    }

    fn flood_layers(&mut self) {
        let total = self.field.len();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        // At most W*H - 1 layers: a shortest path never revisits a cell.
        for step in 1..total {
            let step = step as i32;
            let mut claimed = 0usize;

            for ci in 0..total {
                if self.field[ci].visited != step - 1 {
                    continue;
                }
                let cp = self.field[ci].pos;
                if !(self.node_is_valid)(cp.x, cp.y) {
                    continue;
                }
                for &np in nbuf.cardinal(cp, |n| self.node_ok(n)) {
                    let Some(ni) = self.rng.index_of(np) else {
                        continue;
                    };
                    if self.field[ni].visited != NOT_VISITED || !self.step_ok(cp, np) {
                        continue;
                    }
                    self.field[ni].visited = step;
                    claimed += 1;
                }
            }

            trace!("flood layer {} claimed {} cells", step, claimed);
            if claimed == 0 {
                break;
            }
        }

        self.nbuf = nbuf;
    }
}

#[cfg(test)]
mod tests {
    use gridnav_core::Point;

    use crate::config::{FloodStrategy, NavigatorConfig};
    use crate::manhattan;
    use crate::navigator::{GridNavigator, NOT_VISITED};

    fn flooded<N>(nav: &mut GridNavigator<N>, start: Point)
    where
        N: Fn(i32, i32) -> bool,
    {
        nav.reset_field();
        let si = nav.range().index_of(start).unwrap();
        nav.field[si].visited = 0;
        nav.flood(si);
    }

    #[test]
    fn open_grid_distances_are_manhattan() {
        for strategy in [FloodStrategy::Queue, FloodStrategy::LayerScan] {
            let mut nav = GridNavigator::new(6, 4, |_, _| true)
                .unwrap()
                .with_config(NavigatorConfig::default().with_strategy(strategy));
            let start = Point::new(2, 1);
            flooded(&mut nav, start);
            for n in nav.distance_field() {
                assert_eq!(n.visited as u64, manhattan(start, n.pos), "{:?} at {}", strategy, n.pos);
            }
        }
    }

    #[test]
    fn invalid_cells_stay_unvisited() {
        // Vertical wall at x == 2 with a gap at y == 3.
        let wall = |x: i32, y: i32| !(x == 2 && y != 3);
        for strategy in [FloodStrategy::Queue, FloodStrategy::LayerScan] {
            let mut nav = GridNavigator::new(5, 4, wall)
                .unwrap()
                .with_config(NavigatorConfig::default().with_strategy(strategy));
            flooded(&mut nav, Point::new(0, 0));
            assert_eq!(nav.distance_at(Point::new(2, 0)), NOT_VISITED);
            assert_eq!(nav.distance_at(Point::new(2, 3)), 5);
            assert_eq!(nav.distance_at(Point::new(4, 0)), 10);
        }
    }

    #[test]
    fn invalid_start_does_not_expand() {
        let mut nav = GridNavigator::new(3, 3, |x, y| (x, y) != (1, 1)).unwrap();
        flooded(&mut nav, Point::new(1, 1));
        assert_eq!(nav.distance_at(Point::new(1, 1)), 0);
        assert!(
            nav.distance_field()
                .iter()
                .filter(|n| n.pos != Point::new(1, 1))
                .all(|n| n.visited == NOT_VISITED)
        );
    }

    #[test]
    fn blocked_step_is_not_crossed() {
        for strategy in [FloodStrategy::Queue, FloodStrategy::LayerScan] {
            // Forbid moving right out of (0, 0).
            let mut nav = GridNavigator::new(2, 2, |_, _| true)
                .unwrap()
                .with_step_predicate(|fx, fy, tx, ty| !(fx == 0 && fy == 0 && tx == 1 && ty == 0))
                .with_config(NavigatorConfig::default().with_strategy(strategy));
            nav.reset_field();
            nav.field[0].visited = 0;
            nav.flood(0);
            assert_eq!(nav.distance_at(Point::new(1, 0)), 3, "{:?}", strategy);
            assert_eq!(nav.distance_at(Point::new(1, 1)), 2, "{:?}", strategy);
        }
    }

    #[test]
    fn inert_step_predicate_is_ignored_by_both_strategies() {
        for strategy in [FloodStrategy::Queue, FloodStrategy::LayerScan] {
            let mut nav = GridNavigator::new(2, 2, |_, _| true)
                .unwrap()
                .with_step_predicate(|_, _, _, _| false)
                .with_config(
                    NavigatorConfig::default()
                        .with_strategy(strategy)
                        .with_honor_step_predicate(false),
                );
            nav.reset_field();
            nav.field[0].visited = 0;
            nav.flood(0);
            assert_eq!(nav.distance_at(Point::new(1, 1)), 2, "{:?}", strategy);
        }
    }
}
