//! Tiling geometry engine
//!
//! Pure functions computing non-overlapping window rectangles for a set of
//! window IDs under one of four layout strategies. Nothing in this module
//! touches window state; callers apply the returned [`TileMap`].

mod adaptive;
mod config;
mod engine;
mod layout;

pub use adaptive::{ActiveOverride, Axis, ResizeEdge};
pub use config::{TileConfig, DEFAULT_MASTER_RATIO, DEFAULT_MIN_WINDOW_SIZE, DEFAULT_PADDING};
pub use engine::{grid_dimensions, TileEngine, TileMap};
pub use layout::TileLayout;
