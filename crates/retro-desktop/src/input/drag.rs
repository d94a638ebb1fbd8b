use crate::math::{Rect, Vec2};
use crate::tiling::ResizeEdge;
use crate::types::WindowId;

/// Gesture in progress
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Pointer position relative to the window's top-left corner
        offset: Vec2,
    },
    /// Resizing a window from one edge
    ResizeWindow {
        window_id: WindowId,
        edge: ResizeEdge,
        /// Window rectangle when the resize began
        start_rect: Rect,
        /// Pointer position when the resize began
        start_pointer: Vec2,
        /// Latest rectangle applied
        current: Rect,
        /// Geometry comes from the host rather than pointer deltas
        host_driven: bool,
    },
}

impl DragState {
    /// Window the gesture applies to
    pub fn window_id(&self) -> &WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } | DragState::ResizeWindow { window_id, .. } => {
                window_id
            }
        }
    }

    /// Whether this is a resize
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Whether the host reports geometry for this gesture
    pub fn is_host_driven(&self) -> bool {
        matches!(self, DragState::ResizeWindow { host_driven: true, .. })
    }
}

/// Whether the controller consumed an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Event was consumed
    Handled,
    /// Event was not consumed (no session, or a stale target)
    Unhandled,
}

impl InputResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
