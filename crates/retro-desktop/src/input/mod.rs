//! Pointer interaction
//!
//! Drag and resize gestures are fed in as plain coordinates, so the
//! controller runs the same with or without a browser.

mod capture;
mod controller;
mod drag;
mod resize;

pub use capture::{CaptureGuard, PointerCapture};
pub use controller::InteractionController;
pub use drag::{DragState, InputResult};
pub use resize::calculate_resize;
