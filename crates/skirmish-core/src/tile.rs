/// One grid cell: static terrain data plus at most one occupant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile<O> {
    /// Static obstacle flag. Occupants do not affect it.
    pub passable: bool,
    /// Terrain height, informational only.
    pub elevation: f32,
    pub occupant: Option<O>,
}

impl<O> Default for Tile<O> {
    fn default() -> Self {
        Self {
            passable: true,
            elevation: 0.0,
            occupant: None,
        }
    }
}

impl<O> Tile<O> {
    /// A passable, vacant tile at the given height.
    pub fn with_elevation(elevation: f32) -> Self {
        Self {
            elevation,
            ..Self::default()
        }
    }

    /// An impassable, vacant tile.
    pub fn blocked() -> Self {
        Self {
            passable: false,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}
