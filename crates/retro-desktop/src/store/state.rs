use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::tiling::TileLayout;
use crate::types::WindowId;
use crate::window::{WindowRecord, ZIndex};

/// Immutable snapshot of every window plus tiling mode
///
/// Invariants:
/// - `active_window_id` is `None` or a key of `windows`
/// - `highest_z_index` is at least every record's `z_index`
/// - `tile_layout` is `None` whenever `tile_manager_enabled` is false
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowManagerState {
    pub windows: BTreeMap<WindowId, WindowRecord>,
    pub active_window_id: Option<WindowId>,
    pub highest_z_index: ZIndex,
    pub tile_layout: Option<TileLayout>,
    pub tile_manager_enabled: bool,
}

impl WindowManagerState {
    /// Look up a window
    pub fn get(&self, id: &str) -> DesktopResult<&WindowRecord> {
        self.windows
            .get(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))
    }

    /// Whether a window is open
    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Number of open windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows are open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether a window is the active one
    pub fn is_active(&self, id: &str) -> bool {
        self.active_window_id.as_deref() == Some(id)
    }

    /// Layout in effect: enabled and a strategy selected
    pub fn active_layout(&self) -> Option<TileLayout> {
        if self.tile_manager_enabled {
            self.tile_layout
        } else {
            None
        }
    }

    /// Whether windows are being tiled rather than floating
    pub fn is_tiling(&self) -> bool {
        self.active_layout().is_some()
    }

    /// IDs of non-minimized windows in lexicographic order
    pub fn visible_ids(&self) -> Vec<WindowId> {
        // BTreeMap iteration is already sorted by key
        self.windows
            .values()
            .filter(|w| w.is_visible())
            .map(|w| w.id.clone())
            .collect()
    }

    /// Non-minimized windows from bottom to top
    pub fn stacking_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.values().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{ApplicationKind, OpenWindow};

    fn state_with(ids: &[(&str, ZIndex, bool)]) -> WindowManagerState {
        let mut state = WindowManagerState::default();
        for (id, z, minimized) in ids {
            let mut rec = WindowRecord::open(OpenWindow::new(*id, *id, ApplicationKind::Folder), *z);
            rec.is_minimized = *minimized;
            state.windows.insert(id.to_string(), rec);
            state.highest_z_index = state.highest_z_index.max(*z);
        }
        state
    }

    #[test]
    fn test_get_missing_window() {
        let state = WindowManagerState::default();
        assert_eq!(
            state.get("ghost"),
            Err(DesktopError::WindowNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_visible_ids_sorted_and_filtered() {
        let state = state_with(&[("c", 1, false), ("a", 2, false), ("b", 3, true)]);
        assert_eq!(state.visible_ids(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_stacking_order() {
        let state = state_with(&[("c", 1, false), ("a", 5, false), ("b", 3, false)]);
        let order: Vec<&str> = state.stacking_order().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_active_layout_requires_enabled() {
        let mut state = WindowManagerState {
            tile_layout: Some(TileLayout::Grid),
            ..Default::default()
        };
        assert_eq!(state.active_layout(), None);
        state.tile_manager_enabled = true;
        assert_eq!(state.active_layout(), Some(TileLayout::Grid));
        assert!(state.is_tiling());
    }
}
