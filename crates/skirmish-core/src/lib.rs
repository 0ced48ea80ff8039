//! **skirmish-core** — tile grid model for grid-based tactics games.
//!
//! This crate provides the map layer the rest of the *skirmish* workspace
//! builds on: tile coordinates and rectangles, the [`TileGrid`] with its
//! per-tile passability, elevation and occupancy, and the affine transform
//! between tiles and world positions.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use config::{GridConfig, WorldFallback};
pub use error::GridError;
pub use geom::{Point, Range};
pub use glam::Vec3;
pub use grid::TileGrid;
pub use tile::Tile;
