use serde::{Deserialize, Serialize};

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum with a floor size
    pub fn at_least(self, floor: Size) -> Size {
        Size::new(self.width.max(floor.width), self.height.max(floor.height))
    }
}
