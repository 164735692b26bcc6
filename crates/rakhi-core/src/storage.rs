//! Local key-value persistence.
//!
//! Every widget stores its whole collection as one JSON value under a fixed
//! key. The [`Persistence`] adapter is the only place that touches the store;
//! it never fails from the caller's point of view:
//!
//! - a missing key loads as an empty collection
//! - malformed content loads as an empty collection (logged at `warn`)
//! - a failed write (including quota exhaustion) is logged and dropped

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::GiftResult;

// Submodules
mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

/// Fixed storage keys, one per widget collection.
pub mod keys {
    pub const JOURNAL: &str = "rakhi-journal";
    pub const DIARY_ENTRIES: &str = "rakhi-diary-entries";
    pub const DIARY_NAME: &str = "rakhi-diary-name";
    pub const MOODS: &str = "rakhi-moods";
    pub const ENHANCED_MOODS: &str = "rakhi-enhanced-moods";
    pub const TODOS: &str = "rakhi-todos";
    pub const GOALS: &str = "rakhi-goals";
    pub const STICKY_NOTES: &str = "rakhi-sticky-notes";
    pub const FAMILY_MESSAGES: &str = "rakhi-family-messages";
    pub const GAME_STATS: &str = "rakhi-game-stats";
    pub const ACHIEVEMENTS: &str = "rakhi-achievements";
    pub const VISITED: &str = "rakhi-visited";
}

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> GiftResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> GiftResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> GiftResult<()>;
}

/// Uniform load/save of named JSON blobs.
///
/// Cheap to clone; all clones share the same underlying store.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    /// Wrap a store
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap an already shared store
    pub fn from_shared(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load a collection, falling back to empty on a missing key or bad data.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_value::<Vec<T>>(key).unwrap_or_default()
    }

    /// Load a collection keeping only the elements that decode as `T`.
    ///
    /// Content that is not a JSON array at all still loads as empty.
    pub fn load_filtered<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.load_value::<Vec<serde_json::Value>>(key) else {
            return Vec::new();
        };
        let total = raw.len();
        let items: Vec<T> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();
        if items.len() < total {
            tracing::warn!(
                key,
                dropped = total - items.len(),
                "Dropped malformed entries while loading"
            );
        }
        items
    }

    /// Overwrite a collection.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        self.save_value(key, items);
    }

    /// Load a single JSON value. `None` on a missing key or bad data.
    pub fn load_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored value");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored value");
                None
            }
        }
    }

    /// Overwrite a single JSON value.
    pub fn save_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save_value(key, value) {
            tracing::warn!(key, error = %e, "Failed to persist value");
        }
    }

    /// Overwrite a single JSON value, reporting failures.
    pub fn try_save_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> GiftResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }

    /// Whether anything was ever written under `key`
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.store.get(key), Ok(Some(_)))
    }

    /// Remove whatever is stored under `key`
    pub fn clear(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            tracing::warn!(key, error = %e, "Failed to clear stored value");
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        text: String,
    }

    fn entry(id: &str, text: &str) -> Entry {
        Entry {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let persistence = Persistence::new(MemoryStore::new());
        let loaded: Vec<Entry> = persistence.load("nothing-here");
        assert!(loaded.is_empty());
        assert!(!persistence.contains("nothing-here"));
    }

    #[test]
    fn test_save_and_load_collection() {
        let persistence = Persistence::new(MemoryStore::new());
        let items = vec![entry("1", "first"), entry("2", "second")];

        persistence.save("entries", &items);

        let loaded: Vec<Entry> = persistence.load("entries");
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_malformed_content_loads_empty() {
        let store = MemoryStore::new();
        store.set("entries", "{not json").unwrap();
        let persistence = Persistence::new(store);

        let loaded: Vec<Entry> = persistence.load("entries");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let store = MemoryStore::new();
        store.set("entries", r#"{"id": "1"}"#).unwrap();
        let persistence = Persistence::new(store);

        let loaded: Vec<Entry> = persistence.load("entries");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_filtered_keeps_valid_entries() {
        let store = MemoryStore::new();
        store
            .set(
                "entries",
                r#"[{"id":"1","text":"ok"}, {"id": 7}, "junk", {"id":"2","text":"also ok"}]"#,
            )
            .unwrap();
        let persistence = Persistence::new(store);

        let loaded: Vec<Entry> = persistence.load_filtered("entries");
        assert_eq!(loaded, vec![entry("1", "ok"), entry("2", "also ok")]);
    }

    #[test]
    fn test_quota_failure_is_swallowed() {
        let persistence = Persistence::new(MemoryStore::with_quota(32));
        let big = vec![entry("1", &"x".repeat(100))];

        // Must not panic
        persistence.save("entries", &big);

        let loaded: Vec<Entry> = persistence.load("entries");
        assert!(loaded.is_empty());
        assert!(persistence.try_save_value("entries", &big).is_err());
    }

    #[test]
    fn test_clear_removes_value() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence.save_value(keys::VISITED, &true);
        assert!(persistence.contains(keys::VISITED));

        persistence.clear(keys::VISITED);
        assert!(!persistence.contains(keys::VISITED));
    }
}
