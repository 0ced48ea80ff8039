//! Grid construction parameters.

use crate::error::GridError;

/// What [`TileGrid::world_to_grid`](crate::TileGrid::world_to_grid) does
/// with a world position that falls outside the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldFallback {
    /// Map the position to the origin tile `(0, 0)`.
    ///
    /// Legacy behavior: cursor handling upstream relies on always getting a
    /// tile back, but it hides stray positions.
    #[default]
    Origin,
    /// Report [`GridError::OutOfBounds`].
    Reject,
}

/// Configuration for creating a [`TileGrid`](crate::TileGrid).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of tiles along `x`.
    pub width: i32,
    /// Number of tiles along `y` (world `z`).
    pub length: i32,
    /// World-space edge length of one tile.
    pub cell_size: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub world_fallback: WorldFallback,
}

impl GridConfig {
    /// A configuration with the legacy [`WorldFallback::Origin`] policy.
    pub fn new(width: i32, length: i32, cell_size: f32) -> Self {
        Self {
            width,
            length,
            cell_size,
            world_fallback: WorldFallback::Origin,
        }
    }

    pub fn with_world_fallback(mut self, policy: WorldFallback) -> Self {
        self.world_fallback = policy;
        self
    }

    /// Check that the grid has at least one tile and a usable cell size.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width < 1 || self.length < 1 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                length: self.length,
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let c = GridConfig::new(10, 4, 1.5);
        assert!(c.validate().is_ok());
        assert_eq!(c.world_fallback, WorldFallback::Origin);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            GridConfig::new(0, 4, 1.0).validate(),
            Err(GridError::InvalidDimensions {
                width: 0,
                length: 4
            })
        );
        assert!(GridConfig::new(3, -1, 1.0).validate().is_err());
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert_eq!(
            GridConfig::new(2, 2, 0.0).validate(),
            Err(GridError::InvalidCellSize(0.0))
        );
        assert!(GridConfig::new(2, 2, -1.0).validate().is_err());
        assert!(GridConfig::new(2, 2, f32::NAN).validate().is_err());
        assert!(GridConfig::new(2, 2, f32::INFINITY).validate().is_err());
    }

    #[test]
    fn fallback_builder() {
        let c = GridConfig::new(2, 2, 1.0).with_world_fallback(WorldFallback::Reject);
        assert_eq!(c.world_fallback, WorldFallback::Reject);
    }
}
