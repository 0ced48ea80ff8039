use skirmish_core::{Point, Range, TileGrid};

use crate::error::SearchError;
use crate::nodes::SearchNodes;

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Search engine for one grid rectangle.
///
/// `Pathfinder` owns the per-tile search state and scratch buffers shared by
/// [`find_path`](Pathfinder::find_path) and [`walkable`](Pathfinder::walkable).
/// Every search resets that state before it starts, so results never depend
/// on earlier queries. Searches take `&mut self`: one search runs at a time
/// per engine.
pub struct Pathfinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: SearchNodes,
    pub(crate) step_limit: Option<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a new `Pathfinder` for the given tile rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: SearchNodes::new(rng.len()),
            step_limit: None,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a `Pathfinder` covering the whole of `grid`.
    pub fn for_grid<O>(grid: &TileGrid<O>) -> Self {
        Self::new(grid.bounds())
    }

    /// Abort any search that expands more than `limit` nodes with
    /// [`SearchError::StepLimit`].
    ///
    /// A search closes each tile at most once, so a limit of at least the
    /// range's tile count never triggers.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Set or clear the expansion limit (see [`with_step_limit`](Self::with_step_limit)).
    pub fn set_step_limit(&mut self, limit: Option<usize>) {
        self.step_limit = limit;
    }

    #[inline]
    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    /// Replace the tile rectangle. The node arrays are only reallocated when
    /// the new range has more tiles than they can hold.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.nodes.reserve_nodes(rng.len());
    }

    /// The tile rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Count one node expansion against the step limit.
    #[inline]
    pub(crate) fn step(&self, steps: &mut usize) -> Result<(), SearchError> {
        *steps += 1;
        match self.step_limit {
            Some(limit) if *steps > limit => Err(SearchError::StepLimit(limit)),
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PathfinderSettings {
    range: Range,
    #[serde(default)]
    step_limit: Option<usize>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pathfinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PathfinderSettings {
            range: self.rng,
            step_limit: self.step_limit,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pathfinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let settings = PathfinderSettings::deserialize(deserializer)?;
        let mut pf = Pathfinder::new(settings.range);
        pf.step_limit = settings.step_limit;
        Ok(pf)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathfinder_round_trip() {
        let rng = Range::new(1, 2, 10, 20);
        let pf = Pathfinder::new(rng).with_step_limit(500);
        let json = serde_json::to_string(&pf).unwrap();
        let back: Pathfinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        assert_eq!(back.step_limit(), Some(500));
        // Search state is freshly allocated, not serialized.
        assert_eq!(back.nodes.len(), rng.len());
    }
}
