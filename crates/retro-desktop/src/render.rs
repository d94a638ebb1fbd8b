//! Render list for the presentation layer

use serde::Serialize;

use crate::math::Rect;
use crate::store::WindowManagerState;
use crate::viewport::Viewport;
use crate::window::{AppRegistry, WindowRecord};

/// One window to draw
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub record: WindowRecord,
    pub is_active: bool,
    /// Title bar text, the window title followed by the application name
    pub display_title: String,
    /// On-screen rectangle with defaults and maximize applied
    pub rect: Rect,
}

/// Visible windows from bottom to top of the stack
pub fn render_list(
    state: &WindowManagerState,
    viewport: &Viewport,
    registry: &dyn AppRegistry,
) -> Vec<RenderItem> {
    state
        .stacking_order()
        .into_iter()
        .map(|record| RenderItem {
            is_active: state.is_active(&record.id),
            display_title: format!("{} - {}", record.title, registry.display_name(record.kind)),
            rect: record.effective_rect(viewport, registry),
            record: record.clone(),
        })
        .collect()
}
