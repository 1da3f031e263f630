//! Override Persistence
//!
//! Saved title/completed edits, two string records per todo id.
//! Nothing is cached here: every read and write goes to the backing store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::models::PersistedOverride;

/// String key-value backend
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Failures are logged by the backend and otherwise ignored.
    fn set(&self, key: &str, value: &str);
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    tracing::warn!(key, error = ?err, "local storage rejected write");
                }
            }
            None => tracing::warn!(key, "local storage unavailable, dropping write"),
        }
    }
}

/// In-process map, lost on page reload
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }
}

/// Parse a stored completed record. Only the JSON literals `true`/`false`
/// are accepted; anything else counts as no override.
pub fn parse_completed(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw).ok()
}

/// Reads and writes per-id overrides through a [`KeyValueStore`]
#[derive(Clone)]
pub struct OverrideRepo {
    store: Arc<dyn KeyValueStore>,
    config: AppConfig,
}

impl OverrideRepo {
    pub fn new(store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Local storage when the browser provides it, otherwise a memory store
    pub fn browser(config: AppConfig) -> Self {
        if LocalStorageStore::is_available() {
            Self::new(Arc::new(LocalStorageStore), config)
        } else {
            tracing::warn!("local storage unavailable, edits will not survive a reload");
            Self::new(Arc::new(MemoryStore::new()), config)
        }
    }

    pub fn get_override(&self, id: u32) -> PersistedOverride {
        // An empty saved title falls back to the remote one.
        let title = self
            .store
            .get(&self.config.title_key(id))
            .filter(|title| !title.is_empty());

        let completed_key = self.config.completed_key(id);
        let completed = self.store.get(&completed_key).and_then(|raw| {
            let parsed = parse_completed(&raw);
            if parsed.is_none() {
                tracing::warn!(key = %completed_key, raw = %raw, "ignoring malformed completed flag");
            }
            parsed
        });

        PersistedOverride { title, completed }
    }

    pub fn set_override(&self, id: u32, title: &str, completed: bool) {
        self.store.set(&self.config.title_key(id), title);
        self.store
            .set(&self.config.completed_key(id), if completed { "true" } else { "false" });
    }
}
