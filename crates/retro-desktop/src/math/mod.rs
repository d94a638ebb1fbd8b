//! Core geometry types for the window manager
//!
//! Positions, sizes and rectangles shared by the tiling engine,
//! the window store and the interaction controller.

mod rect;
mod size;
mod vec2;

pub use rect::{Rect, TileRect};
pub use size::Size;
pub use vec2::Vec2;
