//! Creative journal with debounced auto-save.
//!
//! Typing into the form arms the journal's debouncer; when a quiet period
//! passes the form is written either as a new entry or over the entry being
//! edited. Closing the journal closes the debouncer, so a pending save can
//! never write into a cleared form.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, AchievementSink};
use crate::collection::{CollectionEditor, FormPhase, Record};
use crate::debounce::{DebounceTicket, Debouncer};
use crate::storage::{keys, Persistence};
use crate::types::{now_millis, today, ItemId};

/// Mood stickers offered by the journal form
pub const JOURNAL_MOODS: &[&str] = &["😊", "😔", "😍", "🤔", "😴", "🌟", "🔥", "🌈"];

/// Title used when the writer leaves it blank
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub mood: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record for JournalEntry {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// In-progress form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub mood: String,
}

impl Default for JournalDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mood: JOURNAL_MOODS[0].to_string(),
        }
    }
}

impl JournalDraft {
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// Journal widget state
#[derive(Debug)]
pub struct Journal {
    entries: CollectionEditor<JournalEntry>,
    phase: FormPhase,
    draft: JournalDraft,
    autosave: Debouncer,
}

impl Journal {
    pub fn mount(persistence: Persistence, autosave_delay: Duration) -> Self {
        Self {
            entries: CollectionEditor::mount(persistence, keys::JOURNAL),
            phase: FormPhase::Empty,
            draft: JournalDraft::default(),
            autosave: Debouncer::new(autosave_delay),
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        self.entries.items()
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn draft(&self) -> &JournalDraft {
        &self.draft
    }

    /// Entry currently loaded in the form, if it has been saved
    pub fn current(&self) -> Option<&JournalEntry> {
        self.phase.target().and_then(|id| self.entries.get(id))
    }

    /// Open a blank form
    pub fn start_new_entry(&mut self, achievements: &mut dyn AchievementSink) {
        self.autosave.reopen();
        self.autosave.cancel();
        self.draft = JournalDraft::default();
        self.phase.begin_new();
        achievements.unlock(Achievement::CreativeThinker);
    }

    /// Load an existing entry into the form
    pub fn edit_entry(&mut self, id: &ItemId) -> bool {
        let Some(entry) = self.entries.get(id) else {
            return false;
        };
        self.draft = JournalDraft {
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: entry.mood.clone(),
        };
        self.autosave.reopen();
        self.autosave.cancel();
        self.phase.select(id.clone());
        true
    }

    /// Change the title; returns the auto-save ticket to wait on.
    pub fn set_title(&mut self, title: impl Into<String>) -> Option<DebounceTicket> {
        self.draft.title = title.into();
        self.touch()
    }

    /// Change the body; returns the auto-save ticket to wait on.
    pub fn set_content(&mut self, content: impl Into<String>) -> Option<DebounceTicket> {
        self.draft.content = content.into();
        self.touch()
    }

    /// Pick a mood sticker. Moods alone do not trigger an auto-save.
    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.draft.mood = mood.into();
    }

    fn touch(&mut self) -> Option<DebounceTicket> {
        if self.phase.is_editing() && !self.draft.is_blank() {
            Some(self.autosave.arm())
        } else {
            self.autosave.cancel();
            None
        }
    }

    /// Write the form now. Returns the saved entry's id.
    ///
    /// Does nothing when the form is closed or blank.
    pub fn auto_save(&mut self, achievements: &mut dyn AchievementSink) -> Option<ItemId> {
        if !self.phase.is_editing() || self.draft.is_blank() {
            return None;
        }

        let title = if self.draft.title.is_empty() {
            UNTITLED.to_string()
        } else {
            self.draft.title.clone()
        };
        let now = now_millis();

        let existing = self.phase.target().cloned().filter(|id| self.entries.get(id).is_some());
        let id = match existing {
            Some(id) => {
                let content = self.draft.content.clone();
                let mood = self.draft.mood.clone();
                self.entries.update(&id, |entry| {
                    entry.title = title;
                    entry.content = content;
                    entry.mood = mood;
                    entry.updated_at = now;
                });
                id
            }
            None => {
                let draft = &self.draft;
                let id = self
                    .entries
                    .insert_with(|id| JournalEntry {
                        id,
                        title,
                        content: draft.content.clone(),
                        date: today(),
                        mood: draft.mood.clone(),
                        created_at: now,
                        updated_at: now,
                    })
                    .id
                    .clone();
                self.phase.committed(id.clone());
                id
            }
        };

        tracing::debug!(%id, "Journal auto-saved");
        achievements.unlock(Achievement::JournalWriter);
        Some(id)
    }

    /// Save anything pending and close the form.
    pub fn finish_editing(&mut self, achievements: &mut dyn AchievementSink) -> Option<ItemId> {
        let saved = self.auto_save(achievements);
        self.autosave.cancel();
        self.phase.finish();
        saved
    }

    /// Delete an entry; clears the form if it was being edited.
    pub fn delete_entry(&mut self, id: &ItemId) -> Option<JournalEntry> {
        let removed = self.entries.delete(id)?;
        if self.phase.on_deleted(id) {
            self.autosave.cancel();
            self.draft = JournalDraft::default();
        }
        Some(removed)
    }

    /// Tear down: discard the form and invalidate any pending save.
    pub fn close(&mut self) {
        self.autosave.close();
        self.phase.cancel();
        self.draft = JournalDraft::default();
    }
}
