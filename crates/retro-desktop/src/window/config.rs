use serde::{Deserialize, Serialize};

use super::ApplicationKind;
use crate::math::{Size, Vec2};
use crate::types::WindowId;

/// Request to open a window
///
/// `id` is chosen by the caller and must be unique per session; opening an
/// id that is already present replaces that window. Without a position the
/// window is centered, without a size it gets its kind's default size.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWindow {
    pub id: WindowId,
    pub title: String,
    #[serde(rename = "applicationKind")]
    pub kind: ApplicationKind,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub position: Option<Vec2>,
    #[serde(default)]
    pub size: Option<Size>,
}

impl OpenWindow {
    /// Create a request with no content and no geometry
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, kind: ApplicationKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            ..Default::default()
        }
    }

    /// Open a file with the application its extension maps to
    pub fn for_file(id: impl Into<WindowId>, filename: &str) -> Self {
        Self::new(id, filename, ApplicationKind::for_file(filename))
    }

    /// Attach an opaque content payload
    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = content;
        self
    }

    /// Set the initial top-left position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the initial size
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}
