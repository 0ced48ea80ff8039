use std::fmt;

use crate::geom::Point;

/// Errors reported by [`TileGrid`](crate::TileGrid) and
/// [`GridConfig`](crate::GridConfig).
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The coordinate lies outside `[0, width) × [0, length)`.
    OutOfBounds(Point),
    /// Width or length is smaller than one tile.
    InvalidDimensions { width: i32, length: i32 },
    /// Cell size is not a finite positive number.
    InvalidCellSize(f32),
    /// The destination tile already holds an occupant.
    Occupied(Point),
    /// The source tile holds no occupant.
    Vacant(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "tile {p} is out of grid bounds"),
            Self::InvalidDimensions { width, length } => {
                write!(f, "invalid grid dimensions {width}x{length}")
            }
            Self::InvalidCellSize(s) => write!(f, "invalid cell size {s}"),
            Self::Occupied(p) => write!(f, "tile {p} is already occupied"),
            Self::Vacant(p) => write!(f, "tile {p} has no occupant"),
        }
    }
}

impl std::error::Error for GridError {}
