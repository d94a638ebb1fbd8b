//! Desktop configuration

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::persistence::DEFAULT_STORAGE_KEY;
use crate::store::DEFAULT_COMMAND_LOG_LIMIT;
use crate::tiling::{TileConfig, TileLayout};
use crate::viewport::Viewport;

/// Configuration for a [`DesktopEngine`](crate::DesktopEngine)
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Initial screen area
    pub viewport: Viewport,
    /// Tiling geometry
    pub tiling: TileConfig,
    /// Key the layout is persisted under
    pub storage_key: String,
    /// Layout applied at boot when nothing was saved
    pub default_layout: TileLayout,
    /// Whether the tile manager starts enabled when nothing was saved
    pub tile_manager_enabled: bool,
    /// Number of dispatched commands kept for inspection
    pub command_log_limit: usize,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            tiling: TileConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_layout: TileLayout::Grid,
            tile_manager_enabled: false,
            command_log_limit: DEFAULT_COMMAND_LOG_LIMIT,
        }
    }
}

impl DesktopConfig {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry the tiling engine cannot lay out
    pub fn validate(&self) -> DesktopResult<()> {
        let invalid = |reason| DesktopError::InvalidOperation {
            op: "configure",
            reason,
        };
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if self.tiling.padding.is_nan() || self.tiling.padding < 0.0 {
            return Err(invalid("padding must be non-negative"));
        }
        if !positive(self.tiling.master_ratio) || self.tiling.master_ratio >= 1.0 {
            return Err(invalid("master ratio must be between 0 and 1"));
        }
        let floor = self.tiling.min_window_size;
        if !positive(floor.width) || !positive(floor.height) {
            return Err(invalid("minimum window size must be positive"));
        }
        Ok(())
    }
}
