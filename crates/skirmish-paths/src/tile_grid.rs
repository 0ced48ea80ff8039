//! Search traits for [`TileGrid`]: 8-way movement over passable tiles with
//! octile step costs.

use skirmish_core::{Point, TileGrid};

use crate::distance::octile;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl<O> Pather for TileGrid<O> {
    /// In-bounds, passable tiles of the 3×3 neighborhood, column by column.
    /// Search tie-breaks depend on this order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_8()
                .into_iter()
                .filter(|&n| self.in_bounds(n) && self.is_passable(n)),
        );
    }
}

impl<O> WeightedPather for TileGrid<O> {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

impl<O> AstarPather for TileGrid<O> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::GridConfig;

    #[test]
    fn neighbors_in_column_order() {
        let grid: TileGrid<()> = TileGrid::new(GridConfig::new(3, 3, 1.0)).unwrap();
        let mut buf = Vec::new();
        grid.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_skip_bounds_and_obstacles() {
        let mut grid: TileGrid<()> = TileGrid::new(GridConfig::new(3, 3, 1.0)).unwrap();
        grid.set_passable(Point::new(1, 0), false).unwrap();
        let mut buf = Vec::new();
        grid.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn occupants_do_not_block() {
        let mut grid: TileGrid<u8> = TileGrid::new(GridConfig::new(2, 1, 1.0)).unwrap();
        grid.place_occupant(Point::new(1, 0), 3).unwrap();
        let mut buf = Vec::new();
        grid.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0)]);
    }

    #[test]
    fn cost_and_estimate_are_octile() {
        let grid: TileGrid<()> = TileGrid::new(GridConfig::new(5, 5, 1.0)).unwrap();
        assert_eq!(grid.cost(Point::new(0, 0), Point::new(1, 1)), 14);
        assert_eq!(grid.cost(Point::new(0, 0), Point::new(0, 1)), 10);
        assert_eq!(grid.estimate(Point::new(0, 0), Point::new(4, 2)), 48);
    }
}
