use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::KeyValueStore;
use crate::error::{DesktopError, DesktopResult};

/// Key-value store backed by `window.localStorage`
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Bind to the page's local storage
    ///
    /// When storage is unavailable (private browsing, sandboxed frames) every
    /// read misses and every write fails, which the persistence adapter
    /// treats as "nothing saved".
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable, window layout will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> DesktopResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| DesktopError::StorageError("localStorage unavailable".to_string()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(e: JsValue) -> DesktopError {
    DesktopError::StorageError(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> DesktopResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> DesktopResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> DesktopResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
