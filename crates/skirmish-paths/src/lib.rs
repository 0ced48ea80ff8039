//! Shortest-path and movement-range search for tactics grids.
//!
//! Two searches share one cost model: 8-way movement where an orthogonal
//! step costs [`ORTHOGONAL_COST`] and a diagonal step costs
//! [`DIAGONAL_COST`].
//!
//! - **A\*** shortest path between two tiles ([`Pathfinder::find_path`])
//! - **Range flood** of every tile reachable within a movement budget
//!   ([`Pathfinder::walkable`])
//!
//! Both run through [`Pathfinder`], which owns the per-tile search state and
//! resets it at the start of every query. [`TileGrid`](skirmish_core::TileGrid)
//! implements the search traits directly; other maps can implement them too.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | range flood |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod distance;
mod error;
mod nodes;
mod path;
mod pathfinder;
mod tile_grid;
mod traits;
mod walkable;


pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, octile};
pub use error::SearchError;
pub use path::{Path, PathNode, ReachableSet};
pub use pathfinder::Pathfinder;
pub use traits::{AstarPather, Pather, WeightedPather};
