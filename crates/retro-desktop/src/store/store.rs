use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, trace};

use super::reducer::{apply_rects, reduce};
use super::{Command, WindowManagerState};
use crate::tiling::{TileConfig, TileEngine};
use crate::types::SubscriptionId;
use crate::viewport::Viewport;

/// Default bound on the command log
pub const DEFAULT_COMMAND_LOG_LIMIT: usize = 4096;

/// Callback invoked with each new snapshot
pub type Listener = Box<dyn FnMut(&Arc<WindowManagerState>)>;

/// Authoritative owner of window state
///
/// All writes go through [`dispatch`](Self::dispatch); readers take cheap
/// [`snapshot`](Self::snapshot)s that never change underneath them.
/// Structural commands (open, close, minimize, restore, layout changes)
/// re-tile the visible windows while tiling is active, within the same
/// snapshot transition.
pub struct WindowStore {
    state: Arc<WindowManagerState>,
    viewport: Viewport,
    engine: TileEngine,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
    log: VecDeque<Command>,
    log_limit: usize,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(TileConfig::default(), Viewport::default())
    }
}

impl WindowStore {
    /// Create an empty store
    pub fn new(tiling: TileConfig, viewport: Viewport) -> Self {
        Self {
            state: Arc::new(WindowManagerState::default()),
            viewport,
            engine: TileEngine::new(tiling),
            listeners: Vec::new(),
            next_subscription: 1,
            log: VecDeque::new(),
            log_limit: DEFAULT_COMMAND_LOG_LIMIT,
        }
    }

    /// Bound the command log to `limit` entries
    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit;
        self
    }

    /// Apply a command
    ///
    /// Returns whether the state changed. Listeners are notified only when
    /// it did.
    pub fn dispatch(&mut self, command: Command) -> bool {
        trace!(command = command.name(), "dispatch");

        let changed = match reduce(&self.state, &command) {
            Some(mut next) => {
                if command.is_structural() {
                    self.retile(&mut next);
                }
                self.commit(next);
                true
            }
            None => false,
        };

        self.record(command);
        changed
    }

    /// Current state
    pub fn snapshot(&self) -> Arc<WindowManagerState> {
        Arc::clone(&self.state)
    }

    /// Borrow the current state
    pub fn state(&self) -> &WindowManagerState {
        &self.state
    }

    /// Screen area windows are laid out in
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Tiling engine used for structural re-tiles
    pub fn engine(&self) -> &TileEngine {
        &self.engine
    }

    /// Change the screen area, re-tiling when tiling is active
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;

        if self.state.is_tiling() {
            let mut next = WindowManagerState::clone(&self.state);
            self.retile(&mut next);
            self.commit(next);
        }
    }

    /// Register a listener for new snapshots
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<WindowManagerState>) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Commands dispatched so far, oldest first
    ///
    /// Only the most recent entries up to the log limit are kept.
    pub fn command_log(&self) -> impl Iterator<Item = &Command> {
        self.log.iter()
    }

    fn retile(&self, state: &mut WindowManagerState) {
        let Some(layout) = state.active_layout() else {
            return;
        };

        let ids = state.visible_ids();
        let rects = self
            .engine
            .calculate_layout(&ids, layout, &self.viewport, None);
        let applied = apply_rects(state, rects.iter());
        debug!(layout = layout.id(), windows = applied, "structural re-tile");
    }

    fn commit(&mut self, next: WindowManagerState) {
        self.state = Arc::new(next);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    fn record(&mut self, command: Command) {
        if self.log_limit == 0 {
            return;
        }
        while self.log.len() >= self.log_limit {
            self.log.pop_front();
        }
        self.log.push_back(command);
    }
}

impl std::fmt::Debug for WindowStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowStore")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("listeners", &self.listeners.len())
            .field("log_len", &self.log.len())
            .finish()
    }
}
