//! Core types for Rakhi Gift

use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

/// Identifier of an item within its widget's collection.
///
/// New identifiers are ULIDs. Stored identifiers are kept as plain strings so
/// seeded ids such as `default-0` load without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an existing identifier string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Create an identifier from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid.to_string())
    }

    /// Get the string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic identifier source owned by one collection.
///
/// Two ids generated within the same millisecond still differ and still sort
/// in creation order.
pub struct ItemIdGenerator {
    inner: Generator,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }
}

impl Default for ItemIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ItemIdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemIdGenerator").finish_non_exhaustive()
    }
}

impl ItemIdGenerator {

    /// Produce the next identifier
    pub fn next_id(&mut self) -> ItemId {
        // The monotonic counter only overflows after 2^80 ids in one
        // millisecond; a fresh random ULID is still collision-resistant.
        let ulid = self.inner.generate().unwrap_or_else(|_| Ulid::new());
        ItemId::from_ulid(ulid)
    }
}

/// Current time as unix milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in local time
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rapid_ids_are_unique_and_ordered() {
        let mut gen = ItemIdGenerator::new();
        let ids: Vec<ItemId> = (0..1000).map(|_| gen.next_id()).collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let id = ItemId::from_string("default-0");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"default-0\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
