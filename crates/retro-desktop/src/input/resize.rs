use crate::math::{Rect, Size, Vec2};
use crate::tiling::ResizeEdge;

/// Compute the rectangle for a resize in progress
///
/// `delta` is the pointer displacement since the resize began. The edge
/// opposite the dragged one stays anchored, and the size never drops below
/// `floor`.
pub fn calculate_resize(edge: ResizeEdge, start: Rect, delta: Vec2, floor: Size) -> Rect {
    match edge {
        ResizeEdge::Left => {
            let width = (start.width - delta.x).max(floor.width);
            Rect::new(start.right() - width, start.y, width, start.height)
        }
        ResizeEdge::Right => {
            let width = (start.width + delta.x).max(floor.width);
            Rect::new(start.x, start.y, width, start.height)
        }
        ResizeEdge::Top => {
            let height = (start.height - delta.y).max(floor.height);
            Rect::new(start.x, start.bottom() - height, start.width, height)
        }
        ResizeEdge::Bottom => {
            let height = (start.height + delta.y).max(floor.height);
            Rect::new(start.x, start.y, start.width, height)
        }
    }
}
