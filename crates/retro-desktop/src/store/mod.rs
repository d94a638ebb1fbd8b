//! Window store
//!
//! The single writer of window state. Commands are reduced against an
//! immutable snapshot to produce the next one; subscribers are notified of
//! every change.

mod command;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use command::Command;
pub use reducer::reduce;
pub use state::WindowManagerState;
pub use store::{Listener, WindowStore, DEFAULT_COMMAND_LOG_LIMIT};
