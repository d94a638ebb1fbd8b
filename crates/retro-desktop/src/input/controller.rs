use std::rc::Rc;

use tracing::debug;

use super::{calculate_resize, CaptureGuard, DragState, InputResult, PointerCapture};
use crate::math::{Rect, Size, Vec2};
use crate::store::{Command, WindowStore};
use crate::tiling::{ActiveOverride, ResizeEdge, TileMap};
use crate::window::AppRegistry;

struct Session {
    drag: DragState,
    // Released when the session is dropped
    _capture: Option<CaptureGuard>,
}

/// Turns pointer gestures into store commands
///
/// At most one drag or resize runs at a time. While tiling is active, each
/// resize tick re-tiles every visible window around the live rectangle, and
/// the end of any gesture runs one final adaptive pass.
pub struct InteractionController {
    registry: Rc<dyn AppRegistry>,
    capture: Option<Rc<dyn PointerCapture>>,
    min_size: Size,
    session: Option<Session>,
}

impl InteractionController {
    /// Create a controller resizing no smaller than `min_size`
    pub fn new(registry: Rc<dyn AppRegistry>, min_size: Size) -> Self {
        Self {
            registry,
            capture: None,
            min_size,
            session: None,
        }
    }

    /// Install the host hook that routes global pointer events here
    pub fn set_pointer_capture(&mut self, capture: Rc<dyn PointerCapture>) {
        self.capture = Some(capture);
    }

    /// Whether a drag or resize is in progress
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Current gesture, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.session.as_ref().map(|s| &s.drag)
    }

    /// Begin moving a window from a title-bar press at `pointer`
    ///
    /// The window is focused either way; maximized windows do not move.
    pub fn start_move_drag(&mut self, store: &mut WindowStore, id: &str, pointer: Vec2) -> InputResult {
        if self.is_active() {
            debug!(window = id, "gesture already in progress");
            return InputResult::Unhandled;
        }

        let (rect, maximized) = match store.state().get(id) {
            Ok(window) => (
                window.effective_rect(store.viewport(), self.registry.as_ref()),
                window.is_maximized,
            ),
            Err(e) => {
                debug!(error = %e, "move drag on stale window");
                return InputResult::Unhandled;
            }
        };

        store.dispatch(Command::focus(id));
        if maximized {
            return InputResult::Handled;
        }

        debug!(window = id, "move drag started");
        self.begin(DragState::MoveWindow {
            window_id: id.to_string(),
            offset: pointer - rect.position(),
        });
        InputResult::Handled
    }

    /// Begin resizing a window from `edge` with the pointer at `pointer`
    pub fn start_resize_drag(
        &mut self,
        store: &mut WindowStore,
        id: &str,
        edge: ResizeEdge,
        pointer: Vec2,
    ) -> InputResult {
        self.start_resize(store, id, edge, Some(pointer))
    }

    /// Begin a resize whose geometry the host reports
    ///
    /// No pointer capture is taken: raw pointer events are ignored and the
    /// session runs until [`end_host_resize`](Self::end_host_resize).
    pub fn start_host_resize(&mut self, store: &mut WindowStore, id: &str, edge: ResizeEdge) -> InputResult {
        self.start_resize(store, id, edge, None)
    }

    fn start_resize(
        &mut self,
        store: &mut WindowStore,
        id: &str,
        edge: ResizeEdge,
        pointer: Option<Vec2>,
    ) -> InputResult {
        if self.is_active() {
            debug!(window = id, "gesture already in progress");
            return InputResult::Unhandled;
        }

        let rect = match store.state().get(id) {
            Ok(window) => window.effective_rect(store.viewport(), self.registry.as_ref()),
            Err(e) => {
                debug!(error = %e, "resize on stale window");
                return InputResult::Unhandled;
            }
        };

        store.dispatch(Command::focus(id));
        debug!(window = id, edge = ?edge, host_driven = pointer.is_none(), "resize started");
        let drag = DragState::ResizeWindow {
            window_id: id.to_string(),
            edge,
            start_rect: rect,
            start_pointer: pointer.unwrap_or_default(),
            current: rect,
            host_driven: pointer.is_none(),
        };
        match pointer {
            Some(_) => self.begin(drag),
            None => {
                self.session = Some(Session {
                    drag,
                    _capture: None,
                })
            }
        }
        InputResult::Handled
    }

    /// Pointer moved while captured
    pub fn pointer_move(&mut self, store: &mut WindowStore, pointer: Vec2) -> InputResult {
        let Some(session) = self.session.as_ref() else {
            return InputResult::Unhandled;
        };

        match &session.drag {
            DragState::MoveWindow { window_id, offset } => {
                let position = pointer - *offset;
                store.dispatch(Command::move_to(window_id.clone(), position));
            }
            DragState::ResizeWindow {
                host_driven: true, ..
            } => return InputResult::Unhandled,
            DragState::ResizeWindow {
                edge,
                start_rect,
                start_pointer,
                ..
            } => {
                let rect = calculate_resize(*edge, *start_rect, pointer - *start_pointer, self.min_size);
                return self.update_resize(store, rect);
            }
        }
        InputResult::Handled
    }

    /// Apply a resize rectangle computed by the host
    ///
    /// Used when the presentation layer does its own resize math and only
    /// reports the resulting geometry.
    pub fn update_resize(&mut self, store: &mut WindowStore, rect: Rect) -> InputResult {
        let Some(Session {
            drag: DragState::ResizeWindow {
                window_id,
                edge,
                current,
                ..
            },
            ..
        }) = self.session.as_mut()
        else {
            return InputResult::Unhandled;
        };

        let rect = rect.clamp_to_floor(self.min_size);
        *current = rect;
        let pinned = ActiveOverride::resizing(window_id.clone(), rect, *edge);
        apply_adaptive(store, &pinned);
        InputResult::Handled
    }

    /// Final geometry of a host-driven resize; ends the gesture
    pub fn end_host_resize(&mut self, store: &mut WindowStore, rect: Rect) -> InputResult {
        if !self.drag_state().is_some_and(DragState::is_host_driven) {
            return InputResult::Unhandled;
        }
        self.update_resize(store, rect);
        self.finish(store, "host resize end")
    }

    /// Pointer released; ends the gesture
    ///
    /// A host-driven resize stays open for its end callback.
    pub fn pointer_up(&mut self, store: &mut WindowStore) -> InputResult {
        if self.drag_state().is_some_and(DragState::is_host_driven) {
            return InputResult::Unhandled;
        }
        self.finish(store, "pointer up")
    }

    /// Pointer capture lost; ends the gesture like a release
    pub fn pointer_cancel(&mut self, store: &mut WindowStore) -> InputResult {
        if self.drag_state().is_some_and(DragState::is_host_driven) {
            return InputResult::Unhandled;
        }
        self.finish(store, "pointer cancel")
    }

    /// Window lost focus mid-gesture; ends the gesture like a release
    pub fn blur(&mut self, store: &mut WindowStore) -> InputResult {
        self.finish(store, "blur")
    }

    /// Drop any gesture without touching the store
    pub fn teardown(&mut self) {
        if self.session.take().is_some() {
            debug!("gesture discarded on teardown");
        }
    }

    fn begin(&mut self, drag: DragState) {
        let capture = self.capture.clone().map(CaptureGuard::acquire);
        self.session = Some(Session {
            drag,
            _capture: capture,
        });
    }

    fn finish(&mut self, store: &mut WindowStore, reason: &'static str) -> InputResult {
        let Some(session) = self.session.take() else {
            return InputResult::Unhandled;
        };
        debug!(window = %session.drag.window_id(), reason, "gesture ended");

        if store.state().is_tiling() {
            let pinned = match session.drag {
                DragState::MoveWindow { window_id, .. } => {
                    match store.state().get(&window_id) {
                        Ok(window) => ActiveOverride::pinned(
                            window_id.clone(),
                            window.effective_rect(store.viewport(), self.registry.as_ref()),
                        ),
                        Err(_) => return InputResult::Handled,
                    }
                }
                DragState::ResizeWindow {
                    window_id,
                    edge,
                    current,
                    ..
                } => ActiveOverride::resizing(window_id, current, edge),
            };
            apply_adaptive(store, &pinned);
        }
        InputResult::Handled
    }
}

/// Re-tile around a pinned window, or just place it when floating
fn apply_adaptive(store: &mut WindowStore, pinned: &ActiveOverride) {
    match store.state().active_layout() {
        Some(layout) => {
            let ids = store.state().visible_ids();
            let rects = store
                .engine()
                .calculate_layout(&ids, layout, store.viewport(), Some(pinned));
            store.dispatch(Command::ApplyLayout { rects });
        }
        None => {
            let rects = TileMap::from([(pinned.id.clone(), pinned.rect)]);
            store.dispatch(Command::ApplyLayout { rects });
        }
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("min_size", &self.min_size)
            .field("drag", &self.drag_state())
            .finish_non_exhaustive()
    }
}
