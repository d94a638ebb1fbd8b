//! Tiling configuration

use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Gap between adjacent tiles in pixels
pub const DEFAULT_PADDING: f32 = 10.0;

/// Share of the viewport width given to the master pane
pub const DEFAULT_MASTER_RATIO: f32 = 0.6;

/// Smallest tile the engine will emit
///
/// The interaction controller uses the same floor when clamping a resize,
/// so a window can never be dragged smaller than a tile could be.
pub const DEFAULT_MIN_WINDOW_SIZE: Size = Size::new(200.0, 150.0);

/// Configuration for the tiling engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileConfig {
    /// Gap between tiles
    pub padding: f32,
    /// Master pane width as a fraction of the viewport (0.0 - 1.0)
    pub master_ratio: f32,
    /// Minimum tile size
    pub min_window_size: Size,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            master_ratio: DEFAULT_MASTER_RATIO,
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
        }
    }
}

impl TileConfig {
    /// Master ratio limited to the unit interval
    pub fn clamped_master_ratio(&self) -> f32 {
        self.master_ratio.clamp(0.0, 1.0)
    }
}
