//! Window records and application kinds
//!
//! Records are plain data owned by the window store; the application
//! registry supplies per-kind defaults for windows opened without geometry.

mod config;
mod kind;
mod record;

pub use config::OpenWindow;
pub use kind::{AppRegistry, ApplicationKind, BuiltinRegistry};
pub use record::{WindowRecord, ZIndex};
