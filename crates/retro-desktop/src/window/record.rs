use serde::{Deserialize, Serialize};

use super::{AppRegistry, ApplicationKind, OpenWindow};
use crate::math::{Rect, Size, Vec2};
use crate::types::WindowId;
use crate::viewport::Viewport;

/// Stacking order value; higher renders on top
pub type ZIndex = u64;

/// One open window as held by the window store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    #[serde(rename = "applicationKind")]
    pub kind: ApplicationKind,
    /// Opaque payload interpreted by the application renderer
    pub content: serde_json::Value,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Top-left corner; `None` until tiled or dragged
    pub position: Option<Vec2>,
    /// `None` until tiled or resized
    pub size: Option<Size>,
    pub z_index: ZIndex,
}

impl WindowRecord {
    /// Build a fresh record from an open request
    pub fn open(request: OpenWindow, z_index: ZIndex) -> Self {
        Self {
            id: request.id,
            title: request.title,
            kind: request.kind,
            content: request.content,
            is_minimized: false,
            is_maximized: false,
            position: request.position,
            size: request.size,
            z_index,
        }
    }

    /// Whether the window is drawn (not minimized)
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Rectangle the window occupies on screen
    ///
    /// Maximized windows fill the viewport minus the taskbar. Otherwise the
    /// stored size is used, falling back to the registry's default for the
    /// window's kind, and a missing position centers the window.
    pub fn effective_rect(&self, viewport: &Viewport, registry: &dyn AppRegistry) -> Rect {
        if self.is_maximized {
            return viewport.available_area();
        }

        let size = self
            .size
            .unwrap_or_else(|| registry.default_size(self.kind));
        match self.position {
            Some(position) => Rect::from_pos_size(position, size),
            None => viewport.centered(size),
        }
    }
}
