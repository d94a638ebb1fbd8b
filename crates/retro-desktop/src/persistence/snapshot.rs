use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::{Size, Vec2};
use crate::store::WindowManagerState;
use crate::tiling::TileLayout;
use crate::types::WindowId;

/// Saved geometry for one window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

/// The part of window state that survives a reload
///
/// Stored as one JSON object:
/// `{ "windows": { id: { "position", "size" } }, "tileLayout", "tileManagerEnabled" }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLayout {
    #[serde(default)]
    pub windows: BTreeMap<WindowId, PersistedWindow>,
    #[serde(default)]
    pub tile_layout: Option<TileLayout>,
    #[serde(default)]
    pub tile_manager_enabled: bool,
}

impl PersistedLayout {
    /// Extract the persisted subset of a snapshot
    pub fn from_state(state: &WindowManagerState) -> Self {
        Self {
            windows: state
                .windows
                .values()
                .map(|w| {
                    (
                        w.id.clone(),
                        PersistedWindow {
                            position: w.position,
                            size: w.size,
                        },
                    )
                })
                .collect(),
            tile_layout: state.tile_layout,
            tile_manager_enabled: state.tile_manager_enabled,
        }
    }

    /// Saved geometry for a window, if any
    pub fn window(&self, id: &str) -> Option<&PersistedWindow> {
        self.windows.get(id)
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the stored JSON form
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;

    #[test]
    fn test_schema_field_names() {
        let mut layout = PersistedLayout {
            tile_layout: Some(TileLayout::MasterDetail),
            tile_manager_enabled: true,
            ..Default::default()
        };
        layout.windows.insert(
            "notes".to_string(),
            PersistedWindow {
                position: Some(Vec2::new(1.0, 2.0)),
                size: None,
            },
        );

        let value: serde_json::Value = serde_json::from_str(&layout.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "windows": { "notes": { "position": { "x": 1.0, "y": 2.0 } } },
                "tileLayout": "masterDetail",
                "tileManagerEnabled": true
            })
        );
    }

    #[test]
    fn test_accepts_null_layout_and_extra_fields() {
        let json = r#"{
            "windows": { "a": { "id": "a", "size": { "width": 300, "height": 200 } } },
            "tileLayout": null
        }"#;
        let layout = PersistedLayout::from_json(json).unwrap();

        assert_eq!(layout.tile_layout, None);
        assert!(!layout.tile_manager_enabled);
        assert_eq!(
            layout.window("a").and_then(|w| w.size),
            Some(Size::new(300.0, 200.0))
        );
    }

    #[test]
    fn test_rejects_unknown_layout_name() {
        let err = PersistedLayout::from_json(r#"{"windows":{},"tileLayout":"spiral"}"#).unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
