//! Taskbar listing and activation

use serde::Serialize;

use crate::store::{Command, WindowManagerState, WindowStore};
use crate::types::WindowId;

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub is_minimized: bool,
    pub is_active: bool,
}

/// Every open window, minimized ones included, ordered by id
pub fn taskbar_entries(state: &WindowManagerState) -> Vec<TaskbarEntry> {
    state
        .windows
        .values()
        .map(|w| TaskbarEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            is_minimized: w.is_minimized,
            is_active: state.is_active(&w.id),
        })
        .collect()
}

/// Taskbar button click: restore if minimized, then focus
pub fn activate_from_taskbar(store: &mut WindowStore, id: &str) {
    let minimized = match store.state().get(id) {
        Ok(window) => window.is_minimized,
        Err(_) => return,
    };
    if minimized {
        store.dispatch(Command::restore(id));
    }
    store.dispatch(Command::focus(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{ApplicationKind, OpenWindow};

    fn store() -> WindowStore {
        let mut store = WindowStore::default();
        for id in ["b", "a"] {
            store.dispatch(Command::open(OpenWindow::new(id, id.to_uppercase(), ApplicationKind::Terminal)));
        }
        store
    }

    #[test]
    fn test_entries_include_minimized_sorted_by_id() {
        let mut store = store();
        store.dispatch(Command::minimize("b"));

        let entries = taskbar_entries(store.state());
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(entries[0].is_active);
        assert!(entries[1].is_minimized);
    }

    #[test]
    fn test_activate_restores_and_focuses() {
        let mut store = store();
        store.dispatch(Command::minimize("b"));

        activate_from_taskbar(&mut store, "b");

        let state = store.state();
        assert!(!state.windows["b"].is_minimized);
        assert!(state.is_active("b"));
        assert_eq!(state.windows["b"].z_index, state.highest_z_index);
    }

    #[test]
    fn test_activate_unknown_window_is_noop() {
        let mut store = store();
        let before = store.snapshot();
        activate_from_taskbar(&mut store, "ghost");
        assert_eq!(*store.snapshot(), *before);
    }
}
