//! Global tiling shortcuts
//!
//! Alt+1..4 pick a tiling strategy and Alt+0 returns to floating. The
//! shortcuts only fire while the tile manager is enabled.

use serde::{Deserialize, Serialize};

use crate::store::{Command, WindowManagerState};
use crate::tiling::TileLayout;

/// A key press with its modifier state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyChord {
    #[serde(default)]
    pub alt: bool,
    /// `KeyboardEvent.key` value, e.g. "1"
    pub key: String,
}

impl KeyChord {
    /// Chord with Alt held
    pub fn alt(key: impl Into<String>) -> Self {
        Self {
            alt: true,
            key: key.into(),
        }
    }
}

/// Map a key chord to the command it triggers, if any
pub fn shortcut_command(chord: &KeyChord, state: &WindowManagerState) -> Option<Command> {
    if !chord.alt || !state.tile_manager_enabled {
        return None;
    }

    let layout = match chord.key.as_str() {
        "1" => Some(TileLayout::Vertical),
        "2" => Some(TileLayout::Horizontal),
        "3" => Some(TileLayout::Grid),
        "4" => Some(TileLayout::MasterDetail),
        "0" => None,
        _ => return None,
    };
    Some(Command::set_tile_layout(layout))
}
