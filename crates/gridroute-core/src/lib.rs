//! **gridroute-core**: core types for grid-based route planning.
//!
//! This crate provides the foundational types shared across the *gridroute*
//! workspace: geometry primitives, a dense generic grid, cell kinds, and the
//! terrain cost model.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use cell::CellKind;
pub use geom::{Point, Range};
pub use grid::{CellGrid, Grid, GridError, TerrainMap};
pub use terrain::{GRASS_COST, ROAD_COST, Terrain, WATER_COST};
