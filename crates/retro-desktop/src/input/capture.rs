//! Scoped pointer listener registration

use std::rc::Rc;

use tracing::trace;

/// Host hook that routes global pointer events to the controller
///
/// `attach` is called when a drag or resize begins and `detach` when it
/// ends. In the browser this registers `pointermove`/`pointerup` (plus the
/// cancel and blur signals) on the document.
pub trait PointerCapture {
    /// Start delivering pointer events
    fn attach(&self);

    /// Stop delivering pointer events
    fn detach(&self);
}

/// Holds a pointer capture for as long as it lives
///
/// Dropping the guard detaches, so every path that discards the session
/// (pointer up, cancel, blur, teardown, controller drop) releases the
/// listeners.
pub struct CaptureGuard {
    capture: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    /// Attach and return the guard
    pub fn acquire(capture: Rc<dyn PointerCapture>) -> Self {
        trace!("pointer capture attached");
        capture.attach();
        Self { capture }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        trace!("pointer capture detached");
        self.capture.detach();
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard").finish_non_exhaustive()
    }
}
