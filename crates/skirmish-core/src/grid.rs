//! The [`TileGrid`] type — the tactics map.
//!
//! A `TileGrid` owns a row-major array of [`Tile`]s covering
//! `[0, width) × [0, length)`. It answers bounds and passability queries for
//! the search algorithms, keeps track of which entity stands on which tile,
//! and converts between tile coordinates and world positions.

use glam::Vec3;

use crate::config::{GridConfig, WorldFallback};
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::tile::Tile;

/// A 2D grid of [`Tile`]s whose occupants are of type `O`.
///
/// `O` is whatever the game uses to refer to a placed entity (an id, a
/// handle, ...). Each tile holds at most one occupant.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TileGridData<O>"))]
pub struct TileGrid<O> {
    config: GridConfig,
    tiles: Vec<Tile<O>>,
}

impl<O> TileGrid<O> {
    /// Create a grid of passable, flat, vacant tiles.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let len = (config.width as usize) * (config.length as usize);
        let mut tiles = Vec::with_capacity(len);
        tiles.resize_with(len, Tile::default);
        Ok(Self { config, tiles })
    }

    /// The configuration the grid was built from.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.config.width
    }

    #[inline]
    pub fn length(&self) -> i32 {
        self.config.length
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.config.cell_size
    }

    /// The tile rectangle `[0, width) × [0, length)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.config.width, self.config.length)
    }

    /// Whether `0 ≤ p.x < width` and `0 ≤ p.y < length`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.config.width && p.y < self.config.length
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some((p.y as usize) * (self.config.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    fn checked(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds(p))
    }

    // -----------------------------------------------------------------------
    // Terrain
    // -----------------------------------------------------------------------

    /// The static passability flag of tile `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds. Callers check [`in_bounds`](Self::in_bounds)
    /// first.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.tiles[i].passable,
            None => panic!("is_passable: tile {p} outside grid {}", self.bounds()),
        }
    }

    /// Borrow tile `p`.
    pub fn tile(&self, p: Point) -> Result<&Tile<O>, GridError> {
        let i = self.checked(p)?;
        Ok(&self.tiles[i])
    }

    pub fn set_passable(&mut self, p: Point, passable: bool) -> Result<(), GridError> {
        let i = self.checked(p)?;
        self.tiles[i].passable = passable;
        Ok(())
    }

    pub fn elevation(&self, p: Point) -> Result<f32, GridError> {
        let i = self.checked(p)?;
        Ok(self.tiles[i].elevation)
    }

    pub fn set_elevation(&mut self, p: Point, elevation: f32) -> Result<(), GridError> {
        let i = self.checked(p)?;
        self.tiles[i].elevation = elevation;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Occupancy
    // -----------------------------------------------------------------------

    /// The entity standing on `p`, or `None` if the tile is vacant or out of
    /// bounds.
    pub fn occupant(&self, p: Point) -> Option<&O> {
        self.index(p).and_then(|i| self.tiles[i].occupant.as_ref())
    }

    pub fn is_occupied(&self, p: Point) -> bool {
        self.occupant(p).is_some()
    }

    /// Put `occupant` on tile `p`, returning whoever stood there before.
    ///
    /// Out-of-bounds placement is reported and leaves the grid untouched.
    pub fn place_occupant(&mut self, p: Point, occupant: O) -> Result<Option<O>, GridError> {
        let Some(i) = self.index(p) else {
            log::warn!("attempted to place an occupant at {p}, outside grid {}", self.bounds());
            return Err(GridError::OutOfBounds(p));
        };
        Ok(self.tiles[i].occupant.replace(occupant))
    }

    /// Clear tile `p`, returning its former occupant.
    pub fn remove_occupant(&mut self, p: Point) -> Result<Option<O>, GridError> {
        let i = self.checked(p)?;
        Ok(self.tiles[i].occupant.take())
    }

    /// Move the occupant of `from` onto the vacant tile `to`.
    ///
    /// Either both tiles are updated or neither is.
    pub fn move_occupant(&mut self, from: Point, to: Point) -> Result<(), GridError> {
        let fi = self.checked(from)?;
        let ti = self.checked(to)?;
        if self.tiles[fi].occupant.is_none() {
            return Err(GridError::Vacant(from));
        }
        if fi == ti {
            return Ok(());
        }
        if self.tiles[ti].occupant.is_some() {
            return Err(GridError::Occupied(to));
        }
        self.tiles[ti].occupant = self.tiles[fi].occupant.take();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // World conversion
    // -----------------------------------------------------------------------

    /// World position of the centre of tile `p`, at height zero.
    ///
    /// The result is not bounds-checked: the transform is affine and also
    /// defined for tiles outside the grid.
    pub fn grid_to_world(&self, p: Point) -> Vec3 {
        let cs = self.config.cell_size;
        Vec3::new(p.x as f32 * cs + cs / 2.0, 0.0, p.y as f32 * cs + cs / 2.0)
    }

    /// World position of the centre of tile `p`, resting on its terrain.
    pub fn grid_to_world_elevated(&self, p: Point) -> Result<Vec3, GridError> {
        let elevation = self.elevation(p)?;
        Ok(self.grid_to_world(p).with_y(elevation))
    }

    /// The tile containing world position `pos` (height is ignored).
    ///
    /// Positions outside the grid follow the configured
    /// [`WorldFallback`]: either the origin tile or
    /// [`GridError::OutOfBounds`]. Non-finite positions count as outside.
    pub fn world_to_grid(&self, pos: Vec3) -> Result<Point, GridError> {
        let cs = self.config.cell_size;
        let (gx, gz) = ((pos.x / cs).floor(), (pos.z / cs).floor());
        // Casting NaN or infinity would saturate into a plausible tile.
        let p = if gx.is_finite() && gz.is_finite() {
            let p = Point::new(gx as i32, gz as i32);
            if self.in_bounds(p) {
                return Ok(p);
            }
            p
        } else {
            Point::new(-1, -1)
        };
        match self.config.world_fallback {
            WorldFallback::Origin => {
                log::trace!("world position {pos} maps outside grid; using origin");
                Ok(Point::ZERO)
            }
            WorldFallback::Reject => {
                log::warn!("world position {pos} maps outside grid {}", self.bounds());
                Err(GridError::OutOfBounds(p))
            }
        }
    }

    /// Movement waypoints for a sequence of tiles, each resting on its
    /// terrain.
    pub fn path_to_world(&self, path: &[Point]) -> Result<Vec<Vec3>, GridError> {
        path.iter().map(|&p| self.grid_to_world_elevated(p)).collect()
    }

    // -----------------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------------

    /// Row-major iterator over `(Point, &Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile<O>)> + '_ {
        self.bounds().iter().zip(self.tiles.iter())
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

/// Unchecked wire form of a [`TileGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TileGridData<O> {
    config: GridConfig,
    tiles: Vec<Tile<O>>,
}

#[cfg(feature = "serde")]
impl<O> TryFrom<TileGridData<O>> for TileGrid<O> {
    type Error = GridError;

    fn try_from(data: TileGridData<O>) -> Result<Self, GridError> {
        data.config.validate()?;
        let expected = (data.config.width as usize) * (data.config.length as usize);
        if data.tiles.len() != expected {
            return Err(GridError::InvalidDimensions {
                width: data.config.width,
                length: data.config.length,
            });
        }
        Ok(Self {
            config: data.config,
            tiles: data.tiles,
        })
    }
}
