//! Window Manager Core for the Retro Desktop
//!
//! This crate provides the window manager behind the browser desktop shell:
//! - Window lifecycle and stacking (open, close, focus, minimize, maximize)
//! - Tiling layouts (vertical, horizontal, grid, master-detail)
//! - Pointer-driven drag and resize with live adaptive re-tiling
//! - Layout persistence to a key-value store
//!
//! ## Architecture
//!
//! - [`tiling`]: Pure geometry engine computing tile rectangles
//! - [`store`]: Window store, the single writer of window state
//! - [`input`]: Interaction controller for drag and resize gestures
//! - [`persistence`]: Saved layout schema and storage backends
//! - [`window`]: Window records and application kinds
//!
//! Data flows one way: pointer input goes to the interaction controller,
//! which dispatches commands to the store, which publishes a new snapshot.
//!
//! ## Example
//!
//! ```rust
//! use retro_desktop::{
//!     ApplicationKind, Command, DesktopConfig, DesktopEngine, MemoryStore, OpenWindow,
//!     TileLayout,
//! };
//!
//! let mut engine = DesktopEngine::new(DesktopConfig::default(), Box::new(MemoryStore::new()));
//! engine.boot(vec![OpenWindow::new("readme", "README.md", ApplicationKind::TextEditor)]);
//!
//! engine.dispatch(Command::toggle_tile_manager(true));
//! engine.dispatch(Command::set_tile_layout(Some(TileLayout::Grid)));
//!
//! assert_eq!(engine.render_list().len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Explicit Store**: No ambient global; callers hold the store or engine
//! 3. **Fail Closed**: Stale window IDs and bad saved data degrade to safe defaults
//! 4. **Minimal Dependencies**: Browser bindings sit behind the `wasm` feature

pub mod error;
pub mod input;
pub mod math;
pub mod persistence;
pub mod store;
pub mod tiling;
pub mod window;

mod config;
mod engine;
mod keyboard;
mod render;
mod taskbar;
mod types;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use error::{DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InteractionController, PointerCapture};
pub use math::{Rect, Size, TileRect, Vec2};
pub use persistence::{KeyValueStore, MemoryStore, PersistedLayout, PersistenceAdapter};
pub use store::{Command, WindowManagerState, WindowStore};
pub use tiling::{ActiveOverride, ResizeEdge, TileConfig, TileEngine, TileLayout, TileMap};
pub use window::{AppRegistry, ApplicationKind, BuiltinRegistry, OpenWindow, WindowRecord};

pub use config::DesktopConfig;
pub use engine::DesktopEngine;
pub use keyboard::{shortcut_command, KeyChord};
pub use render::{render_list, RenderItem};
pub use taskbar::{activate_from_taskbar, taskbar_entries, TaskbarEntry};
pub use types::{SubscriptionId, WindowId};
pub use viewport::{Viewport, DEFAULT_TASKBAR_HEIGHT};
