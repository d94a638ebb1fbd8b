//! Layout persistence
//!
//! Window geometry and the tiling mode are stored as one JSON entry in a
//! key-value backend and restored at boot.

mod adapter;
mod kv;
#[cfg(feature = "wasm")]
mod local_storage;
mod snapshot;

pub use adapter::{PersistenceAdapter, DEFAULT_STORAGE_KEY};
pub use kv::{KeyValueStore, MemoryStore};
#[cfg(feature = "wasm")]
pub use local_storage::LocalStorageStore;
pub use snapshot::{PersistedLayout, PersistedWindow};
