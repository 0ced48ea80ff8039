use std::collections::BinaryHeap;

use skirmish_core::Point;

use crate::Pathfinder;
use crate::error::SearchError;
use crate::nodes::NO_PARENT;
use crate::path::Path;
use crate::traits::AstarPather;

impl Pathfinder {
    /// Compute the cheapest route from `from` to `to` using A*.
    ///
    /// Returns `Ok(None)` when `to` cannot be reached. The returned path
    /// excludes `from` and ends at `to`; it is empty when `from == to`.
    /// The start tile itself is never checked for passability.
    ///
    /// Among open nodes of equal `f = g + h`, the one closer to the goal
    /// (lower `h`) is expanded first; remaining ties go to the node that
    /// entered the open set first. This makes the chosen route
    /// deterministic.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<Path>, SearchError> {
        let start_idx = self.idx(from).ok_or(SearchError::OutOfBounds(from))?;
        let goal_idx = self.idx(to).ok_or(SearchError::OutOfBounds(to))?;

        if start_idx == goal_idx {
            return Ok(Some(Path::default()));
        }

        self.nodes.reset();
        self.nodes.open(start_idx, 0, pather.estimate(from, to), NO_PARENT);

        let mut open: BinaryHeap<_> = BinaryHeap::new();
        open.push(self.nodes.entry(start_idx));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut steps = 0;

        let outcome = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Ok(false);
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper route.
            if !self.nodes.is_open(ci) || current.g != self.nodes.g[ci] {
                continue;
            }

            if let Err(err) = self.step(&mut steps) {
                break 'search Err(err);
            }

            self.nodes.close(ci);
            if ci == goal_idx {
                break 'search Ok(true);
            }

            let current_g = self.nodes.g[ci];
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes.is_closed(ni) {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current_point, np);
                if self.nodes.is_open(ni) && tentative_g >= self.nodes.g[ni] {
                    continue;
                }
                self.nodes.open(ni, tentative_g, pather.estimate(np, to), ci);
                open.push(self.nodes.entry(ni));
            }
        };

        self.nbuf = nbuf;

        if !outcome? {
            log::debug!("no path from {from} to {to} ({steps} nodes expanded)");
            return Ok(None);
        }

        let steps_taken: Vec<Point> = self
            .nodes
            .retrace(goal_idx)
            .into_iter()
            .map(|i| self.point(i))
            .collect();
        let cost = self.nodes.g[goal_idx];
        log::debug!(
            "path from {from} to {to}: {} steps, cost {cost} ({steps} nodes expanded)",
            steps_taken.len()
        );
        Ok(Some(Path::new(steps_taken, cost)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::octile;
    use skirmish_core::{GridConfig, TileGrid};

    fn open_grid(width: i32, length: i32) -> TileGrid<()> {
        TileGrid::new(GridConfig::new(width, length, 1.0)).unwrap()
    }

    fn assert_valid_path(grid: &TileGrid<()>, from: Point, path: &Path) {
        let mut prev = from;
        let mut cost = 0;
        for &p in path {
            let d = p - prev;
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != Point::ZERO);
            assert!(grid.is_passable(p), "path crosses blocked tile {p}");
            cost += octile(prev, p);
            prev = p;
        }
        assert_eq!(cost, path.cost());
    }

    #[test]
    fn diagonal_across_open_grid() {
        let grid = open_grid(5, 5);
        let mut pf = Pathfinder::for_grid(&grid);
        let path = pf
            .find_path(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap()
            .unwrap();
        assert_eq!(
            path.steps(),
            &[
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
                Point::new(4, 4)
            ]
        );
        assert_eq!(path.cost(), 56);
    }

    #[test]
    fn routes_around_blocked_centre() {
        let mut grid = open_grid(5, 5);
        grid.set_passable(Point::new(2, 2), false).unwrap();
        let mut pf = Pathfinder::for_grid(&grid);
        let from = Point::new(0, 0);
        let path = pf
            .find_path(&grid, from, Point::new(4, 4))
            .unwrap()
            .unwrap();
        assert!(!path.steps().contains(&Point::new(2, 2)));
        assert_eq!(path.goal(), Some(Point::new(4, 4)));
        assert_eq!(path.len(), 5);
        assert_eq!(path.cost(), 62);
        assert!(path.cost() > 56);
        assert_valid_path(&grid, from, &path);
    }

    #[test]
    fn same_tile_gives_empty_path() {
        let grid = open_grid(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        let path = pf
            .find_path(&grid, Point::new(1, 1), Point::new(1, 1))
            .unwrap()
            .unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn straight_line_is_orthogonal() {
        let grid = open_grid(6, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        let path = pf
            .find_path(&grid, Point::new(0, 1), Point::new(5, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.cost(), 50);
        assert!(path.iter().all(|p| p.y == 1));
    }

    #[test]
    fn walled_in_start_finds_nothing() {
        let mut grid = open_grid(4, 4);
        let start = Point::new(1, 1);
        for p in grid.bounds() {
            if p != start {
                grid.set_passable(p, false).unwrap();
            }
        }
        let mut pf = Pathfinder::for_grid(&grid);
        assert_eq!(pf.find_path(&grid, start, Point::new(3, 3)), Ok(None));
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let mut grid = open_grid(4, 4);
        grid.set_passable(Point::new(3, 3), false).unwrap();
        let mut pf = Pathfinder::for_grid(&grid);
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(3, 3)),
            Ok(None)
        );
    }

    #[test]
    fn wall_with_gap() {
        // ....
        // ###.
        // ....
        let mut grid = open_grid(4, 3);
        for x in 0..3 {
            grid.set_passable(Point::new(x, 1), false).unwrap();
        }
        let mut pf = Pathfinder::for_grid(&grid);
        let from = Point::new(0, 0);
        let path = pf
            .find_path(&grid, from, Point::new(0, 2))
            .unwrap()
            .unwrap();
        assert!(path.steps().contains(&Point::new(3, 1)));
        assert_eq!(path.cost(), 10 + 10 + 14 + 14 + 10 + 10);
        assert_valid_path(&grid, from, &path);
    }

    #[test]
    fn impassable_start_is_allowed() {
        let mut grid = open_grid(3, 1);
        grid.set_passable(Point::new(0, 0), false).unwrap();
        let mut pf = Pathfinder::for_grid(&grid);
        let path = pf
            .find_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.steps(), &[Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let grid = open_grid(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        assert_eq!(
            pf.find_path(&grid, Point::new(-1, 0), Point::new(1, 1)),
            Err(SearchError::OutOfBounds(Point::new(-1, 0)))
        );
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(1, 3)),
            Err(SearchError::OutOfBounds(Point::new(1, 3)))
        );
    }

    #[test]
    fn open_grid_paths_match_octile_distance() {
        let grid = open_grid(9, 7);
        let mut pf = Pathfinder::for_grid(&grid);
        let from = Point::new(2, 5);
        for to in grid.bounds() {
            let path = pf.find_path(&grid, from, to).unwrap().unwrap();
            assert_eq!(path.cost(), octile(from, to), "to {to}");
            // Every step brings the unit strictly closer to the goal.
            let mut remaining = octile(from, to);
            for &p in &path {
                let d = octile(p, to);
                assert!(d < remaining);
                remaining = d;
            }
            assert_eq!(remaining, 0);
        }
    }

    #[test]
    fn repeated_searches_are_independent() {
        let mut grid = open_grid(6, 6);
        grid.set_passable(Point::new(2, 2), false).unwrap();
        let mut pf = Pathfinder::for_grid(&grid);
        let first = pf.find_path(&grid, Point::new(0, 0), Point::new(5, 5));
        // A failing search in between must not leak state.
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(2, 2)),
            Ok(None)
        );
        let _ = pf.walkable(&grid, Point::new(5, 0), 30).unwrap();
        let second = pf.find_path(&grid, Point::new(0, 0), Point::new(5, 5));
        assert_eq!(first, second);
    }

    #[test]
    fn step_limit_aborts_search() {
        let grid = open_grid(10, 10);
        let mut pf = Pathfinder::for_grid(&grid).with_step_limit(3);
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(9, 0)),
            Err(SearchError::StepLimit(3))
        );
        pf.set_step_limit(Some(grid.bounds().len()));
        let path = pf
            .find_path(&grid, Point::new(0, 0), Point::new(9, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 90);
    }
}
