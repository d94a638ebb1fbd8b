use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};

/// Available tiling strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileLayout {
    /// Full-width rows stacked top to bottom
    Vertical,
    /// Full-height columns side by side
    Horizontal,
    /// Near-square grid filled in row-major order
    Grid,
    /// One large pane on the left, the rest stacked on the right
    MasterDetail,
}

impl TileLayout {
    /// Get all available layouts, in keyboard shortcut order
    pub fn all() -> &'static [TileLayout] {
        &[
            TileLayout::Vertical,
            TileLayout::Horizontal,
            TileLayout::Grid,
            TileLayout::MasterDetail,
        ]
    }

    /// Get the display name for this layout
    pub fn name(&self) -> &'static str {
        match self {
            TileLayout::Vertical => "Vertical",
            TileLayout::Horizontal => "Horizontal",
            TileLayout::Grid => "Grid",
            TileLayout::MasterDetail => "Master / Detail",
        }
    }

    /// Get the string ID used in persisted state
    pub fn id(&self) -> &'static str {
        match self {
            TileLayout::Vertical => "vertical",
            TileLayout::Horizontal => "horizontal",
            TileLayout::Grid => "grid",
            TileLayout::MasterDetail => "masterDetail",
        }
    }

    /// Parse from string ID (e.g., "grid", "masterDetail")
    pub fn from_id(id: &str) -> DesktopResult<Self> {
        match id {
            "vertical" => Ok(TileLayout::Vertical),
            "horizontal" => Ok(TileLayout::Horizontal),
            "grid" => Ok(TileLayout::Grid),
            "masterDetail" => Ok(TileLayout::MasterDetail),
            other => Err(DesktopError::UnknownLayout(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_id_roundtrip() {
        for layout in TileLayout::all() {
            assert_eq!(TileLayout::from_id(layout.id()), Ok(*layout));
        }
    }

    #[test]
    fn test_layout_from_unknown_id() {
        assert_eq!(
            TileLayout::from_id("spiral"),
            Err(DesktopError::UnknownLayout("spiral".to_string()))
        );
    }

    #[test]
    fn test_layout_serializes_as_id() {
        let json = serde_json::to_string(&TileLayout::MasterDetail).unwrap();
        assert_eq!(json, "\"masterDetail\"");

        let parsed: TileLayout = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(parsed, TileLayout::Grid);
    }

    #[test]
    fn test_layout_name() {
        assert_eq!(TileLayout::Vertical.name(), "Vertical");
        assert_eq!(TileLayout::MasterDetail.name(), "Master / Detail");
    }
}
