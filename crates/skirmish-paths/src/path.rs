//! Search results: [`Path`] and [`ReachableSet`].

use std::collections::HashMap;

use skirmish_core::Point;

/// A tile with the movement cost at which a search reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// A route returned by [`Pathfinder::find_path`](crate::Pathfinder::find_path).
///
/// Steps run from the first tile after the start up to and including the
/// goal. An empty path means the unit is already at its goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: i32) -> Self {
        Self { steps, cost }
    }

    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of steps (tiles entered).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total movement cost of the route.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// The last tile, or `None` for an empty path.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.steps
    }
}

/// The tiles a unit can reach within a movement budget, as returned by
/// [`Pathfinder::walkable`](crate::Pathfinder::walkable).
///
/// Always contains the start tile (at cost 0). Iteration order is
/// unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachableSet {
    costs: HashMap<Point, i32>,
}

impl ReachableSet {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            costs: HashMap::with_capacity(n),
        }
    }

    pub(crate) fn insert(&mut self, pos: Point, cost: i32) {
        self.costs.insert(pos, cost);
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.costs.contains_key(&p)
    }

    /// The cost at which `p` was reached, if it was.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<i32> {
        self.costs.get(&p).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.costs
            .iter()
            .map(|(&pos, &cost)| PathNode { pos, cost })
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.costs.keys().copied()
    }

    /// Whether every tile of `self` is also in `other`.
    pub fn is_subset(&self, other: &ReachableSet) -> bool {
        self.costs.keys().all(|p| other.contains(*p))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::new(vec![Point::new(3, 7), Point::new(4, 8)], 24);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
