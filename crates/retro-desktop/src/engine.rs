//! Desktop engine
//!
//! Wires the window store, interaction controller and persistence adapter
//! together and is the entry point the presentation layer talks to.

use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::DesktopConfig;
use crate::input::{InputResult, InteractionController, PointerCapture};
use crate::keyboard::{shortcut_command, KeyChord};
use crate::math::{Rect, Size, Vec2};
use crate::persistence::{KeyValueStore, PersistedLayout, PersistenceAdapter};
use crate::render::{render_list, RenderItem};
use crate::store::{Command, WindowManagerState, WindowStore};
use crate::taskbar::{activate_from_taskbar, taskbar_entries, TaskbarEntry};
use crate::tiling::{ResizeEdge, TileLayout};
use crate::types::SubscriptionId;
use crate::viewport::Viewport;
use crate::window::{AppRegistry, BuiltinRegistry, OpenWindow};

/// Window manager for one desktop session
pub struct DesktopEngine {
    config: DesktopConfig,
    store: WindowStore,
    controller: InteractionController,
    persistence: PersistenceAdapter,
    registry: Rc<dyn AppRegistry>,
    boot_complete: bool,
}

impl DesktopEngine {
    /// Create an engine with the built-in application registry
    pub fn new(config: DesktopConfig, storage: Box<dyn KeyValueStore>) -> Self {
        Self::with_registry(config, storage, Rc::new(BuiltinRegistry))
    }

    /// Create an engine with a custom application registry
    pub fn with_registry(
        config: DesktopConfig,
        storage: Box<dyn KeyValueStore>,
        registry: Rc<dyn AppRegistry>,
    ) -> Self {
        let store = WindowStore::new(config.tiling, config.viewport)
            .with_log_limit(config.command_log_limit);
        let controller =
            InteractionController::new(Rc::clone(&registry), config.tiling.min_window_size);
        let persistence = PersistenceAdapter::new(storage, config.storage_key.clone());

        Self {
            config,
            store,
            controller,
            persistence,
            registry,
            boot_complete: false,
        }
    }

    /// Install the host hook for global pointer listeners
    pub fn set_pointer_capture(&mut self, capture: Rc<dyn PointerCapture>) {
        self.controller.set_pointer_capture(capture);
    }

    /// Restore the saved layout and open the initial windows
    ///
    /// Saved geometry overrides the geometry in `initial`. Autosave starts
    /// once boot completes.
    pub fn boot(&mut self, initial: Vec<OpenWindow>) {
        let saved = self.persistence.load();

        let enabled = saved
            .as_ref()
            .map_or(self.config.tile_manager_enabled, |s| s.tile_manager_enabled);
        self.store.dispatch(Command::toggle_tile_manager(enabled));

        for mut request in initial {
            if let Some(window) = saved.as_ref().and_then(|s| s.window(&request.id)) {
                request.position = window.position.or(request.position);
                request.size = window.size.or(request.size);
            }
            self.store.dispatch(Command::open(request));
        }

        self.boot_complete = true;
        let layout = saved
            .as_ref()
            .and_then(|s| s.tile_layout)
            .unwrap_or(self.config.default_layout);
        self.store.dispatch(Command::set_tile_layout(Some(layout)));

        info!(
            windows = self.store.state().len(),
            restored = saved.is_some(),
            tiling = ?self.store.state().active_layout(),
            "desktop booted"
        );
        self.autosave();
    }

    /// Whether [`boot`](Self::boot) has finished
    pub fn is_booted(&self) -> bool {
        self.boot_complete
    }

    /// Apply a command to the window store
    pub fn dispatch(&mut self, command: Command) -> bool {
        let layout_change = matches!(
            command,
            Command::SetTileLayout { .. } | Command::ToggleTileManager { .. }
        );
        let changed = self.store.dispatch(command);
        if changed && layout_change {
            info!(
                enabled = self.store.state().tile_manager_enabled,
                layout = ?self.store.state().tile_layout.as_ref().map(TileLayout::name),
                "tiling mode changed"
            );
        }
        self.autosave();
        changed
    }

    /// Open a window
    pub fn open_window(&mut self, request: OpenWindow) -> bool {
        self.dispatch(Command::open(request))
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) -> bool {
        self.dispatch(Command::close(id))
    }

    /// Raise and activate a window
    pub fn focus_window(&mut self, id: &str) -> bool {
        self.dispatch(Command::focus(id))
    }

    /// Handle a global key press; returns whether it was a shortcut
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        match shortcut_command(chord, self.store.state()) {
            Some(command) => {
                debug!(key = %chord.key, "tiling shortcut");
                self.dispatch(command);
                true
            }
            None => false,
        }
    }

    /// Taskbar buttons
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        taskbar_entries(self.store.state())
    }

    /// Taskbar button click
    pub fn activate_from_taskbar(&mut self, id: &str) {
        activate_from_taskbar(&mut self.store, id);
        self.autosave();
    }

    /// Windows to draw, bottom to top
    pub fn render_list(&self) -> Vec<RenderItem> {
        render_list(self.store.state(), self.store.viewport(), self.registry.as_ref())
    }

    /// Title-bar press
    pub fn start_move_drag(&mut self, id: &str, x: f32, y: f32) -> InputResult {
        let result = self
            .controller
            .start_move_drag(&mut self.store, id, Vec2::new(x, y));
        self.autosave();
        result
    }

    /// Resize-handle press
    pub fn start_resize_drag(&mut self, id: &str, edge: ResizeEdge, x: f32, y: f32) -> InputResult {
        self.controller
            .start_resize_drag(&mut self.store, id, edge, Vec2::new(x, y))
    }

    /// Captured pointer move
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        self.controller.pointer_move(&mut self.store, Vec2::new(x, y))
    }

    /// Captured pointer release
    pub fn pointer_up(&mut self) -> InputResult {
        let result = self.controller.pointer_up(&mut self.store);
        self.autosave();
        result
    }

    /// Captured pointer cancelled
    pub fn pointer_cancel(&mut self) -> InputResult {
        let result = self.controller.pointer_cancel(&mut self.store);
        self.autosave();
        result
    }

    /// Browser window lost focus
    pub fn blur(&mut self) -> InputResult {
        let result = self.controller.blur(&mut self.store);
        self.autosave();
        result
    }

    /// Resize began on a window the host resizes itself
    ///
    /// Geometry then arrives through [`resize_update`](Self::resize_update)
    /// rather than pointer deltas, and the session stays open until
    /// [`resize_end`](Self::resize_end) even if the pointer is released first.
    pub fn resize_start(&mut self, id: &str, edge: ResizeEdge) -> InputResult {
        self.controller.start_host_resize(&mut self.store, id, edge)
    }

    /// Live geometry from a host-driven resize
    pub fn resize_update(&mut self, id: &str, size: Size, position: Vec2) -> InputResult {
        if !self.is_resizing(id) {
            return InputResult::Unhandled;
        }
        self.controller
            .update_resize(&mut self.store, Rect::from_pos_size(position, size))
    }

    /// Final geometry from a host-driven resize
    pub fn resize_end(&mut self, id: &str, size: Size, position: Vec2) -> InputResult {
        if !self.is_resizing(id) {
            return InputResult::Unhandled;
        }
        let result = self
            .controller
            .end_host_resize(&mut self.store, Rect::from_pos_size(position, size));
        self.autosave();
        result
    }

    /// Screen resized; re-tiles when tiling is active
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let taskbar = self.store.viewport().taskbar_height;
        self.store
            .set_viewport(Viewport::with_taskbar(width, height, taskbar));
        self.autosave();
    }

    /// Drop any gesture in progress, e.g. when the desktop unmounts
    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    /// Current state
    pub fn snapshot(&self) -> Arc<WindowManagerState> {
        self.store.snapshot()
    }

    /// Register a listener for new snapshots
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<WindowManagerState>) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Remove a listener
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The window store
    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    /// Whether a drag or resize is in progress
    pub fn is_interacting(&self) -> bool {
        self.controller.is_active()
    }

    fn is_resizing(&self, id: &str) -> bool {
        self.controller
            .drag_state()
            .is_some_and(|d| d.is_resize() && d.window_id() == id)
    }

    /// Persist the layout if it changed, outside of gestures
    fn autosave(&mut self) {
        if !self.boot_complete || self.controller.is_active() {
            return;
        }
        let layout = PersistedLayout::from_state(self.store.state());
        if self.persistence.save_if_changed(&layout) {
            debug!(windows = layout.windows.len(), "window layout saved");
        }
    }
}

impl std::fmt::Debug for DesktopEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopEngine")
            .field("store", &self.store)
            .field("controller", &self.controller)
            .field("persistence", &self.persistence)
            .field("boot_complete", &self.boot_complete)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::window::ApplicationKind;

    fn engine_with(storage: Rc<MemoryStore>) -> DesktopEngine {
        let config = DesktopConfig {
            viewport: Viewport::with_taskbar(900.0, 600.0, 40.0),
            ..Default::default()
        };
        DesktopEngine::new(config, Box::new(storage))
    }

    fn initial() -> Vec<OpenWindow> {
        vec![
            OpenWindow::new("readme", "README.md", ApplicationKind::TextEditor),
            OpenWindow::new("music", "Music", ApplicationKind::AudioPlayer),
        ]
    }

    #[test]
    fn test_boot_without_saved_layout() {
        let storage = Rc::new(MemoryStore::new());
        let mut engine = engine_with(storage.clone());
        engine.boot(initial());

        let state = engine.snapshot();
        assert!(engine.is_booted());
        assert_eq!(state.len(), 2);
        assert!(!state.tile_manager_enabled);
        assert_eq!(state.tile_layout, None);
        assert_eq!(state.active_window_id.as_deref(), Some("music"));
        // Boot state is written once boot completes
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_no_autosave_before_boot() {
        let storage = Rc::new(MemoryStore::new());
        let mut engine = engine_with(storage.clone());
        engine.open_window(OpenWindow::new("x", "X", ApplicationKind::Terminal));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_handle_key_switches_layout_when_enabled() {
        let mut engine = engine_with(Rc::new(MemoryStore::new()));
        engine.boot(initial());
        assert!(!engine.handle_key(&KeyChord::alt("1")));

        engine.dispatch(Command::toggle_tile_manager(true));
        assert!(engine.handle_key(&KeyChord::alt("2")));
        assert_eq!(
            engine.snapshot().tile_layout,
            Some(TileLayout::Horizontal)
        );

        assert!(engine.handle_key(&KeyChord::alt("0")));
        assert_eq!(engine.snapshot().tile_layout, None);
        assert!(engine.snapshot().tile_manager_enabled);
    }

    #[test]
    fn test_resize_callbacks_only_for_resizing_window() {
        let mut engine = engine_with(Rc::new(MemoryStore::new()));
        engine.boot(initial());

        assert_eq!(
            engine.resize_update("readme", Size::new(300.0, 300.0), Vec2::ZERO),
            InputResult::Unhandled
        );

        engine.resize_start("readme", ResizeEdge::Right);
        assert!(engine.is_interacting());
        assert_eq!(
            engine.resize_update("music", Size::new(300.0, 300.0), Vec2::ZERO),
            InputResult::Unhandled
        );
        assert!(engine
            .resize_end("readme", Size::new(320.0, 240.0), Vec2::new(5.0, 6.0))
            .is_handled());
        assert!(!engine.is_interacting());

        let readme = &engine.snapshot().windows["readme"];
        assert_eq!(readme.size, Some(Size::new(320.0, 240.0)));
        assert_eq!(readme.position, Some(Vec2::new(5.0, 6.0)));
    }
}
