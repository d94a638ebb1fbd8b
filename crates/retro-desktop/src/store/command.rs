use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::tiling::{TileLayout, TileMap};
use crate::types::WindowId;
use crate::window::OpenWindow;

/// Commands accepted by [`WindowStore::dispatch`](super::WindowStore::dispatch)
///
/// Commands naming an unknown window are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Open (or replace) a window and make it active
    Open(OpenWindow),
    /// Remove a window
    Close { id: WindowId },
    /// Hide a window; clears maximized
    Minimize { id: WindowId },
    /// Fill the available area; clears minimized
    Maximize { id: WindowId },
    /// Clear both minimized and maximized
    Restore { id: WindowId },
    /// Raise a window to the top and make it active
    Focus { id: WindowId },
    /// Set a window's top-left corner
    Move { id: WindowId, position: Vec2 },
    /// Set a window's size
    Resize { id: WindowId, size: Size },
    /// Select a tiling strategy, or `None` for floating; ignored while the
    /// tile manager is disabled
    SetTileLayout { layout: Option<TileLayout> },
    /// Enable or disable the tile manager; disabling clears the layout
    ToggleTileManager { enabled: bool },
    /// Move and resize several windows at once
    ApplyLayout { rects: TileMap },
}

impl Command {
    pub fn open(request: OpenWindow) -> Self {
        Command::Open(request)
    }

    pub fn close(id: impl Into<WindowId>) -> Self {
        Command::Close { id: id.into() }
    }

    pub fn minimize(id: impl Into<WindowId>) -> Self {
        Command::Minimize { id: id.into() }
    }

    pub fn maximize(id: impl Into<WindowId>) -> Self {
        Command::Maximize { id: id.into() }
    }

    pub fn restore(id: impl Into<WindowId>) -> Self {
        Command::Restore { id: id.into() }
    }

    pub fn focus(id: impl Into<WindowId>) -> Self {
        Command::Focus { id: id.into() }
    }

    pub fn move_to(id: impl Into<WindowId>, position: Vec2) -> Self {
        Command::Move {
            id: id.into(),
            position,
        }
    }

    pub fn resize(id: impl Into<WindowId>, size: Size) -> Self {
        Command::Resize {
            id: id.into(),
            size,
        }
    }

    pub fn set_tile_layout(layout: Option<TileLayout>) -> Self {
        Command::SetTileLayout { layout }
    }

    pub fn toggle_tile_manager(enabled: bool) -> Self {
        Command::ToggleTileManager { enabled }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Open(_) => "open",
            Command::Close { .. } => "close",
            Command::Minimize { .. } => "minimize",
            Command::Maximize { .. } => "maximize",
            Command::Restore { .. } => "restore",
            Command::Focus { .. } => "focus",
            Command::Move { .. } => "move",
            Command::Resize { .. } => "resize",
            Command::SetTileLayout { .. } => "set_tile_layout",
            Command::ToggleTileManager { .. } => "toggle_tile_manager",
            Command::ApplyLayout { .. } => "apply_layout",
        }
    }

    /// Whether the command changes the set of tiled windows or the strategy
    ///
    /// The store re-tiles after these while tiling is active.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Command::Open(_)
                | Command::Close { .. }
                | Command::Minimize { .. }
                | Command::Restore { .. }
                | Command::SetTileLayout { .. }
                | Command::ToggleTileManager { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::ApplicationKind;

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_value(Command::focus("notes")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "focus", "id": "notes"}));

        let json = serde_json::to_value(Command::set_tile_layout(Some(TileLayout::MasterDetail)))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "setTileLayout", "layout": "masterDetail"})
        );
    }

    #[test]
    fn test_open_command_from_json() {
        let json = r#"{"type":"open","id":"calc","title":"Calculator","applicationKind":"CALCULATOR"}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::open(OpenWindow::new("calc", "Calculator", ApplicationKind::Calculator))
        );
    }

    #[test]
    fn test_structural_commands() {
        assert!(Command::close("a").is_structural());
        assert!(Command::toggle_tile_manager(true).is_structural());
        assert!(!Command::focus("a").is_structural());
        assert!(!Command::maximize("a").is_structural());
        assert!(!Command::move_to("a", Vec2::ZERO).is_structural());
    }
}
