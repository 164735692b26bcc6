//! Generic collection editor shared by every list widget.
//!
//! A widget's collection is loaded once on mount, edited in memory and
//! written back in full after every mutation. There is no diffing and no
//! version check: the last write wins.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::Persistence;
use crate::types::{ItemId, ItemIdGenerator};

/// An item record stored in a widget collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> &ItemId;
}

/// Ordered, persisted list of records under one storage key.
#[derive(Debug)]
pub struct CollectionEditor<T: Record> {
    key: &'static str,
    persistence: Persistence,
    items: Vec<T>,
    ids: ItemIdGenerator,
}

impl<T: Record> CollectionEditor<T> {
    /// Load the collection stored under `key`
    pub fn mount(persistence: Persistence, key: &'static str) -> Self {
        let items = persistence.load(key);
        Self::with_items(persistence, key, items)
    }

    /// Load keeping only the stored entries that decode
    pub fn mount_filtered(persistence: Persistence, key: &'static str) -> Self {
        let items = persistence.load_filtered(key);
        Self::with_items(persistence, key, items)
    }

    /// Start from the given items without reading the store
    pub fn with_items(persistence: Persistence, key: &'static str, items: Vec<T>) -> Self {
        tracing::debug!(key, count = items.len(), "Mounted collection");
        Self {
            key,
            persistence,
            items,
            ids: ItemIdGenerator::new(),
        }
    }

    /// Storage key owning this collection
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Generate a fresh identifier for this collection
    pub fn next_id(&mut self) -> ItemId {
        self.ids.next_id()
    }

    /// Build a new item with a fresh id, append it and persist.
    pub fn insert_with(&mut self, build: impl FnOnce(ItemId) -> T) -> &T {
        let id = self.next_id();
        let item = build(id);
        self.items.push(item);
        self.persist();
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Edit the item with `id` in place and persist. Returns false if absent.
    pub fn update(&mut self, id: &ItemId, edit: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        edit(item);
        self.persist();
        true
    }

    /// Replace the item with the same id and persist. Returns false if absent.
    pub fn replace(&mut self, item: T) -> bool {
        let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == item.id()) else {
            return false;
        };
        *slot = item;
        self.persist();
        true
    }

    /// Edit every item in place and persist once
    pub fn update_all(&mut self, mut edit: impl FnMut(&mut T)) {
        self.items.iter_mut().for_each(&mut edit);
        self.persist();
    }

    /// Remove the item with `id`, keeping the others in order.
    pub fn delete(&mut self, id: &ItemId) -> Option<T> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.persist();
        Some(removed)
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Write the whole collection back
    pub fn persist(&self) {
        self.persistence.save(self.key, &self.items);
    }

    /// The adapter this collection writes through
    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }
}

/// Form lifecycle of an editing widget.
///
/// ```text
/// Empty ──begin──▶ Editing ──commit──▶ Saved
///   ▲                │  ▲                │
///   └────cancel──────┘  └────select──────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Nothing is being edited
    #[default]
    Empty,
    /// The form is open; `target` is the item being edited, if it exists yet
    Editing { target: Option<ItemId> },
    /// The form's content has been written as `id`
    Saved { id: ItemId },
}

impl FormPhase {
    /// Open a blank form
    pub fn begin_new(&mut self) {
        *self = FormPhase::Editing { target: None };
    }

    /// Open an existing item
    pub fn select(&mut self, id: ItemId) {
        *self = FormPhase::Editing { target: Some(id) };
    }

    /// Record that the form was written as `id`, staying open
    pub fn committed(&mut self, id: ItemId) {
        if let FormPhase::Editing { target } = self {
            *target = Some(id);
        }
    }

    /// Close the form after saving
    pub fn finish(&mut self) {
        *self = match self.target().cloned() {
            Some(id) => FormPhase::Saved { id },
            None => FormPhase::Empty,
        };
    }

    /// Discard the form
    pub fn cancel(&mut self) {
        *self = FormPhase::Empty;
    }

    /// React to an item being deleted; returns true if it was the form's item
    pub fn on_deleted(&mut self, id: &ItemId) -> bool {
        if self.target() == Some(id) {
            self.cancel();
            true
        } else {
            false
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormPhase::Editing { .. })
    }

    /// Item the form refers to
    pub fn target(&self) -> Option<&ItemId> {
        match self {
            FormPhase::Empty => None,
            FormPhase::Editing { target } => target.as_ref(),
            FormPhase::Saved { id } => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: ItemId,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> &ItemId {
            &self.id
        }
    }

    fn editor() -> CollectionEditor<Note> {
        CollectionEditor::mount(Persistence::new(MemoryStore::new()), "notes")
    }

    #[test]
    fn test_insert_appends_and_persists() {
        let mut notes = editor();
        notes.insert_with(|id| Note { id, text: "a".into() });
        notes.insert_with(|id| Note { id, text: "b".into() });

        let reloaded: CollectionEditor<Note> =
            CollectionEditor::mount(notes.persistence().clone(), "notes");
        let texts: Vec<_> = reloaded.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_update_and_replace() {
        let mut notes = editor();
        let id = notes.insert_with(|id| Note { id, text: "draft".into() }).id.clone();

        assert!(notes.update(&id, |n| n.text = "final".into()));
        assert_eq!(notes.get(&id).unwrap().text, "final");

        assert!(notes.replace(Note { id: id.clone(), text: "again".into() }));
        assert_eq!(notes.get(&id).unwrap().text, "again");

        let missing = ItemId::from_string("missing");
        assert!(!notes.update(&missing, |n| n.text.clear()));
        assert!(!notes.replace(Note { id: missing, text: String::new() }));
    }

    #[test]
    fn test_delete_missing_is_none() {
        let mut notes = editor();
        assert!(notes.delete(&ItemId::from_string("nope")).is_none());
    }

    #[test]
    fn test_clear() {
        let mut notes = editor();
        notes.insert_with(|id| Note { id, text: "a".into() });
        notes.clear();
        assert!(notes.is_empty());
        assert!(notes.persistence().contains("notes"));
    }

    #[test]
    fn test_form_phase_transitions() {
        let mut phase = FormPhase::default();
        assert_eq!(phase, FormPhase::Empty);

        phase.begin_new();
        assert!(phase.is_editing());
        assert_eq!(phase.target(), None);

        let id = ItemId::from_string("1");
        phase.committed(id.clone());
        assert_eq!(phase.target(), Some(&id));

        phase.finish();
        assert_eq!(phase, FormPhase::Saved { id: id.clone() });

        phase.select(id.clone());
        assert!(phase.is_editing());

        assert!(phase.on_deleted(&id));
        assert_eq!(phase, FormPhase::Empty);
    }

    #[test]
    fn test_finish_without_commit_returns_to_empty() {
        let mut phase = FormPhase::default();
        phase.begin_new();
        phase.finish();
        assert_eq!(phase, FormPhase::Empty);
    }
}
