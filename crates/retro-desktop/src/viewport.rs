//! Screen area available to the window manager

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};

/// Default height reserved for the taskbar at the bottom of the screen
pub const DEFAULT_TASKBAR_HEIGHT: f32 = 40.0;

/// Viewport dimensions plus the strip reserved for the taskbar
///
/// Tiles and maximized windows fill the viewport minus the taskbar
/// reservation; windows without a stored position are centered in it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Viewport {
    /// Screen width in pixels
    pub width: f32,
    /// Screen height in pixels
    pub height: f32,
    /// Height reserved at the bottom for the taskbar
    pub taskbar_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the default taskbar reservation
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
        }
    }

    /// Create a viewport with an explicit taskbar reservation
    pub const fn with_taskbar(width: f32, height: f32, taskbar_height: f32) -> Self {
        Self {
            width,
            height,
            taskbar_height,
        }
    }

    /// Usable width, never negative
    pub fn available_width(&self) -> f32 {
        self.width.max(0.0)
    }

    /// Usable height after the taskbar reservation, never negative
    pub fn available_height(&self) -> f32 {
        (self.height - self.taskbar_height).max(0.0)
    }

    /// The area windows may occupy
    pub fn available_area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.available_width(), self.available_height())
    }

    /// Rectangle of the given size centered in the available area
    pub fn centered(&self, size: Size) -> Rect {
        let origin = Vec2::new(
            (self.available_width() - size.width) / 2.0,
            (self.available_height() - size.height) / 2.0,
        );
        Rect::from_pos_size(origin, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_area_excludes_taskbar() {
        let viewport = Viewport::with_taskbar(900.0, 600.0, 40.0);
        assert_eq!(viewport.available_area(), Rect::new(0.0, 0.0, 900.0, 560.0));
    }

    #[test]
    fn test_available_height_never_negative() {
        let viewport = Viewport::with_taskbar(100.0, 20.0, 40.0);
        assert_eq!(viewport.available_height(), 0.0);
    }

    #[test]
    fn test_centered() {
        let viewport = Viewport::with_taskbar(1000.0, 640.0, 40.0);
        let rect = viewport.centered(Size::new(600.0, 400.0));
        assert_eq!(rect, Rect::new(200.0, 100.0, 600.0, 400.0));
    }
}
