//! Live-resize override for adaptive re-tiling

use serde::{Deserialize, Serialize};

use crate::math::TileRect;
use crate::types::WindowId;

/// Window edge grabbed during a resize
///
/// Corner handles map to the horizontal edge on their side, so a
/// south-east drag is treated as a right-edge drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis along which a resize changes a window's extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl ResizeEdge {
    /// Parse a resize handle identifier
    ///
    /// Accepts edge names (`"left"`) and compass handles (`"w"`, `"se"`).
    pub fn from_handle(handle: &str) -> Option<Self> {
        match handle {
            "left" | "w" | "nw" | "sw" => Some(ResizeEdge::Left),
            "right" | "e" | "ne" | "se" => Some(ResizeEdge::Right),
            "top" | "n" => Some(ResizeEdge::Top),
            "bottom" | "s" => Some(ResizeEdge::Bottom),
            _ => None,
        }
    }

    /// Axis this edge resizes along
    pub fn axis(&self) -> Axis {
        match self {
            ResizeEdge::Left | ResizeEdge::Right => Axis::Horizontal,
            ResizeEdge::Top | ResizeEdge::Bottom => Axis::Vertical,
        }
    }
}

/// One window pinned to its live rectangle while the others re-tile around it
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveOverride {
    /// Window being dragged or resized
    pub id: WindowId,
    /// Its in-progress rectangle
    pub rect: TileRect,
    /// Edge being dragged, if this is a resize
    pub edge: Option<ResizeEdge>,
}

impl ActiveOverride {
    /// Override for a window being resized from `edge`
    pub fn resizing(id: impl Into<WindowId>, rect: TileRect, edge: ResizeEdge) -> Self {
        Self {
            id: id.into(),
            rect,
            edge: Some(edge),
        }
    }

    /// Override for a window that is not being resized (e.g. after a move)
    pub fn pinned(id: impl Into<WindowId>, rect: TileRect) -> Self {
        Self {
            id: id.into(),
            rect,
            edge: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_handle() {
        assert_eq!(ResizeEdge::from_handle("left"), Some(ResizeEdge::Left));
        assert_eq!(ResizeEdge::from_handle("n"), Some(ResizeEdge::Top));
        assert_eq!(ResizeEdge::from_handle("se"), Some(ResizeEdge::Right));
        assert_eq!(ResizeEdge::from_handle("sw"), Some(ResizeEdge::Left));
        assert_eq!(ResizeEdge::from_handle("diagonal"), None);
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(ResizeEdge::Right.axis(), Axis::Horizontal);
        assert_eq!(ResizeEdge::Bottom.axis(), Axis::Vertical);
    }
}
