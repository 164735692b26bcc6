//! In-process store, used for ephemeral sessions and tests.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::KeyValueStore;
use crate::error::{GiftError, GiftResult};

/// HashMap-backed store with an optional byte quota.
///
/// The quota counts key and value bytes across all entries, the way a
/// browser's local storage limit counts characters.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes past `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Bytes currently used by keys and values
    pub fn used_bytes(&self) -> usize {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GiftResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GiftResult<()> {
        let mut entries = self.entries.write();

        if let Some(limit) = self.quota {
            let current: usize = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
            let replaced = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let needed = current - replaced + key.len() + value.len();
            if needed > limit {
                return Err(GiftError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> GiftResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.remove("a").unwrap();
        assert!(store.get("a").unwrap().is_none());

        // Removing again is fine
        store.remove("a").unwrap();
    }

    #[test]
    fn test_quota_counts_replacement() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "12345678").unwrap(); // 9 bytes
        assert_eq!(store.used_bytes(), 9);

        // Replacing the same key frees its old bytes first
        store.set("k", "abcdefghi").unwrap(); // 10 bytes
        assert!(store.set("other", "x").is_err());
        assert_eq!(store.len(), 1);
    }
}
