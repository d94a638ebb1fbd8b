//! Pure transition function for the window store

use tracing::debug;

use super::{Command, WindowManagerState};
use crate::math::TileRect;
use crate::window::{WindowRecord, ZIndex};

/// Apply one command to a snapshot
///
/// Returns `None` when the command leaves the state untouched: it targets a
/// window that is not open, or it changes the layout while the tile manager
/// is disabled.
pub fn reduce(state: &WindowManagerState, command: &Command) -> Option<WindowManagerState> {
    match command {
        Command::Open(request) => {
            let mut next = state.clone();
            let z_index = next_z(state);
            let record = WindowRecord::open(request.clone(), z_index);
            next.active_window_id = Some(record.id.clone());
            next.windows.insert(record.id.clone(), record);
            next.highest_z_index = z_index;
            Some(next)
        }
        Command::Close { id } => {
            let mut next = state.clone();
            next.windows.remove(id)?;
            if next.active_window_id.as_ref() == Some(id) {
                next.active_window_id = None;
            }
            Some(next)
        }
        Command::Minimize { id } => update(state, id, |w| {
            w.is_minimized = true;
            w.is_maximized = false;
        }),
        Command::Maximize { id } => update(state, id, |w| {
            w.is_maximized = true;
            w.is_minimized = false;
        }),
        Command::Restore { id } => update(state, id, |w| {
            w.is_maximized = false;
            w.is_minimized = false;
        }),
        Command::Focus { id } => {
            let z_index = next_z(state);
            let mut next = update(state, id, |w| w.z_index = z_index)?;
            next.active_window_id = Some(id.clone());
            next.highest_z_index = z_index;
            Some(next)
        }
        Command::Move { id, position } => update(state, id, |w| w.position = Some(*position)),
        Command::Resize { id, size } => update(state, id, |w| w.size = Some(*size)),
        Command::SetTileLayout { layout } => {
            if !state.tile_manager_enabled {
                debug!(layout = ?layout, "tile manager disabled, layout change ignored");
                return None;
            }
            let mut next = state.clone();
            next.tile_layout = *layout;
            Some(next)
        }
        Command::ToggleTileManager { enabled } => {
            let mut next = state.clone();
            next.tile_manager_enabled = *enabled;
            if !enabled {
                next.tile_layout = None;
            }
            Some(next)
        }
        Command::ApplyLayout { rects } => {
            let mut next = state.clone();
            let applied = apply_rects(&mut next, rects.iter());
            (applied > 0).then_some(next)
        }
    }
}

/// Write tile rectangles into matching records, returning how many matched
pub(crate) fn apply_rects<'a>(
    state: &mut WindowManagerState,
    rects: impl Iterator<Item = (&'a String, &'a TileRect)>,
) -> usize {
    let mut applied = 0;
    for (id, rect) in rects {
        if let Some(window) = state.windows.get_mut(id) {
            window.position = Some(rect.position());
            window.size = Some(rect.size());
            applied += 1;
        }
    }
    applied
}

fn next_z(state: &WindowManagerState) -> ZIndex {
    state.highest_z_index + 1
}

fn update(
    state: &WindowManagerState,
    id: &str,
    f: impl FnOnce(&mut WindowRecord),
) -> Option<WindowManagerState> {
    if let Err(e) = state.get(id) {
        debug!(error = %e, "ignoring command for stale window");
        return None;
    }
    let mut next = state.clone();
    if let Some(window) = next.windows.get_mut(id) {
        f(window);
    }
    Some(next)
}
