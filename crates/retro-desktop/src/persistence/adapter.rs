use tracing::{debug, warn};

use super::{KeyValueStore, PersistedLayout};
use crate::error::{DesktopError, DesktopResult};

/// Default key the layout is stored under
pub const DEFAULT_STORAGE_KEY: &str = "window-manager-config";

/// Saves and restores the persisted layout under a single key
///
/// Fails closed: a missing, unreadable or malformed entry loads as `None`
/// and a failed write is logged and dropped. Nothing here returns an error
/// to the caller.
pub struct PersistenceAdapter {
    backend: Box<dyn KeyValueStore>,
    key: String,
    last_saved: Option<PersistedLayout>,
}

impl PersistenceAdapter {
    /// Create an adapter over `backend` using `key`
    pub fn new(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            last_saved: None,
        }
    }

    /// Load the saved layout, or `None` if there is no usable entry
    pub fn load(&self) -> Option<PersistedLayout> {
        match self.try_load() {
            Ok(layout) => layout,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding saved window layout");
                None
            }
        }
    }

    /// Write the layout; returns whether it was stored
    pub fn save(&mut self, layout: &PersistedLayout) -> bool {
        match self.try_save(layout) {
            Ok(()) => {
                self.last_saved = Some(layout.clone());
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to save window layout");
                false
            }
        }
    }

    /// Write the layout unless it equals the last one written
    pub fn save_if_changed(&mut self, layout: &PersistedLayout) -> bool {
        if self.last_saved.as_ref() == Some(layout) {
            return false;
        }
        self.save(layout)
    }

    fn try_load(&self) -> DesktopResult<Option<PersistedLayout>> {
        let Some(json) = self.backend.get(&self.key)? else {
            debug!(key = %self.key, "no saved window layout");
            return Ok(None);
        };
        PersistedLayout::from_json(&json)
            .map(Some)
            .map_err(|e| DesktopError::PersistenceError(e.to_string()))
    }

    fn try_save(&self, layout: &PersistedLayout) -> DesktopResult<()> {
        let json = layout.to_json()?;
        self.backend.set(&self.key, &json)
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::math::{Size, Vec2};
    use crate::persistence::{MemoryStore, PersistedWindow};
    use crate::tiling::TileLayout;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> DesktopResult<Option<String>> {
            Err(DesktopError::StorageError("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> DesktopResult<()> {
            Err(DesktopError::StorageError("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> DesktopResult<()> {
            Err(DesktopError::StorageError("storage disabled".to_string()))
        }
    }

    fn sample() -> PersistedLayout {
        let mut layout = PersistedLayout {
            tile_layout: Some(TileLayout::Horizontal),
            tile_manager_enabled: true,
            ..Default::default()
        };
        layout.windows.insert(
            "readme".to_string(),
            PersistedWindow {
                position: Some(Vec2::new(12.5, 40.0)),
                size: Some(Size::new(640.0, 480.0)),
            },
        );
        layout.windows.insert("empty".to_string(), PersistedWindow::default());
        layout
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut adapter = PersistenceAdapter::new(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY);
        assert!(adapter.save(&sample()));
        assert_eq!(adapter.load(), Some(sample()));
    }

    #[test]
    fn test_missing_entry_loads_none() {
        let adapter = PersistenceAdapter::new(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY);
        assert_eq!(adapter.load(), None);
    }

    #[test]
    fn test_malformed_entry_loads_none() {
        for junk in ["{not json", "42", r#"{"tileLayout": 7}"#] {
            let backend = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, junk);
            let adapter = PersistenceAdapter::new(Box::new(backend), DEFAULT_STORAGE_KEY);
            assert_eq!(adapter.load(), None, "{junk}");
        }
    }

    #[test]
    fn test_backend_failures_are_swallowed() {
        let mut adapter = PersistenceAdapter::new(Box::new(BrokenStore), DEFAULT_STORAGE_KEY);
        assert_eq!(adapter.load(), None);
        assert!(!adapter.save(&sample()));
    }

    #[test]
    fn test_save_if_changed_skips_duplicates() {
        let backend = Rc::new(MemoryStore::new());
        let mut adapter = PersistenceAdapter::new(Box::new(backend.clone()), "layout");

        assert!(adapter.save_if_changed(&sample()));
        backend.remove("layout").unwrap();
        assert!(!adapter.save_if_changed(&sample()));
        assert!(backend.is_empty());

        let mut changed = sample();
        changed.tile_layout = Some(TileLayout::Grid);
        assert!(adapter.save_if_changed(&changed));
        assert_eq!(backend.len(), 1);
    }
}
