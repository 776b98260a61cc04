//! **gridpath-core** — the grid model shared by the *gridpath* crates.
//!
//! A [`Grid`] is a fixed `rows × cols` board of [`Cell`]s with exactly one
//! start and one finish cell. Cells carry a wall flag plus the per-search
//! state (distance, visited flag, predecessor) that `gridpath-search` writes
//! while it runs.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;

pub use cell::{Cell, UNREACHED};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, manhattan};
pub use grid::Grid;
pub use mapgen::scatter_walls;
