//! Personal diary: named book of dated entries with mood, weather and tags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{CollectionEditor, FormPhase, Record};
use crate::storage::{keys, Persistence};
use crate::types::{now_millis, ItemId};

pub const DEFAULT_DIARY_NAME: &str = "My Beautiful Diary";

pub const DIARY_MOODS: &[&str] = &["😊", "😍", "😔", "😴", "🤔", "🥰", "😤", "🌟", "💖", "🎉"];

pub const DIARY_WEATHERS: &[&str] = &["☀️", "⛅", "🌤️", "🌦️", "🌧️", "⛈️", "🌨️", "🌈", "🌙", "⭐"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub mood: String,
    pub weather: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record for DiaryEntry {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Form contents for a diary page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryPage {
    pub title: String,
    pub content: String,
    pub mood: String,
    pub weather: String,
    /// Comma separated, as typed
    pub tags: String,
}

impl Default for DiaryPage {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mood: DIARY_MOODS[0].to_string(),
            weather: DIARY_WEATHERS[0].to_string(),
            tags: String::new(),
        }
    }
}

/// Split a comma separated tag list, trimming and dropping blanks
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Diary widget state
#[derive(Debug)]
pub struct Diary {
    name: String,
    entries: CollectionEditor<DiaryEntry>,
    phase: FormPhase,
    page: DiaryPage,
}

impl Diary {
    pub fn mount(persistence: Persistence) -> Self {
        let name = persistence
            .load_value::<String>(keys::DIARY_NAME)
            .unwrap_or_else(|| DEFAULT_DIARY_NAME.to_string());
        Self {
            name,
            entries: CollectionEditor::mount(persistence, keys::DIARY_ENTRIES),
            phase: FormPhase::Empty,
            page: DiaryPage::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.entries
            .persistence()
            .save_value(keys::DIARY_NAME, &self.name);
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        self.entries.items()
    }

    /// Entries, most recently updated first
    pub fn entries_by_recent(&self) -> Vec<&DiaryEntry> {
        let mut sorted: Vec<_> = self.entries.items().iter().collect();
        sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        sorted
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn page(&self) -> &DiaryPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut DiaryPage {
        &mut self.page
    }

    /// Open a blank page
    pub fn start_new_entry(&mut self) {
        self.page = DiaryPage::default();
        self.phase.begin_new();
    }

    /// Open an existing page
    pub fn edit_entry(&mut self, id: &ItemId) -> bool {
        let Some(entry) = self.entries.get(id) else {
            return false;
        };
        self.page = DiaryPage {
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: entry.mood.clone(),
            weather: entry.weather.clone(),
            tags: entry.tags.join(", "),
        };
        self.phase.select(id.clone());
        true
    }

    /// Write the page dated `date` and close the form.
    ///
    /// Returns `None` (leaving the form open) when title and content are
    /// both blank.
    pub fn save_entry(&mut self, date: NaiveDate) -> Option<ItemId> {
        if self.page.title.trim().is_empty() && self.page.content.trim().is_empty() {
            return None;
        }

        let title = if self.page.title.is_empty() {
            format!("Entry from {}", date.format("%-d/%-m/%Y"))
        } else {
            self.page.title.clone()
        };
        let now = now_millis();
        let page = &self.page;

        let existing = self.phase.target().and_then(|id| self.entries.get(id)).cloned();
        let id = match existing {
            Some(previous) => {
                let id = previous.id.clone();
                self.entries.replace(DiaryEntry {
                    id: id.clone(),
                    title,
                    content: page.content.clone(),
                    date,
                    mood: page.mood.clone(),
                    weather: page.weather.clone(),
                    tags: parse_tags(&page.tags),
                    created_at: previous.created_at,
                    updated_at: now,
                });
                id
            }
            None => self
                .entries
                .insert_with(|id| DiaryEntry {
                    id,
                    title,
                    content: page.content.clone(),
                    date,
                    mood: page.mood.clone(),
                    weather: page.weather.clone(),
                    tags: parse_tags(&page.tags),
                    created_at: now,
                    updated_at: now,
                })
                .id
                .clone(),
        };

        tracing::debug!(%id, "Diary page saved");
        self.phase.committed(id.clone());
        self.phase.finish();
        self.page = DiaryPage::default();
        Some(id)
    }

    /// Close the page without saving
    pub fn cancel(&mut self) {
        self.phase.cancel();
        self.page = DiaryPage::default();
    }

    pub fn delete_entry(&mut self, id: &ItemId) -> Option<DiaryEntry> {
        let removed = self.entries.delete(id)?;
        if self.phase.on_deleted(id) {
            self.page = DiaryPage::default();
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 9).unwrap()
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" family, rakhi ,, sweets,  "), vec!["family", "rakhi", "sweets"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_name_defaults_and_persists() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut diary = Diary::mount(persistence.clone());
        assert_eq!(diary.name(), DEFAULT_DIARY_NAME);

        diary.rename("Fuchi's Secrets");
        let reloaded = Diary::mount(persistence);
        assert_eq!(reloaded.name(), "Fuchi's Secrets");
    }

    #[test]
    fn test_blank_page_is_rejected() {
        let mut diary = Diary::mount(Persistence::new(MemoryStore::new()));
        diary.start_new_entry();
        diary.page_mut().title = "   ".into();
        assert!(diary.save_entry(date()).is_none());
        assert!(diary.phase().is_editing());
    }

    #[test]
    fn test_save_new_and_update_keeps_created_at() {
        let mut diary = Diary::mount(Persistence::new(MemoryStore::new()));
        diary.start_new_entry();
        diary.page_mut().content = "A lovely day".into();
        diary.page_mut().tags = "rakhi, family".into();
        let id = diary.save_entry(date()).unwrap();

        let entry = diary.entries()[0].clone();
        assert_eq!(entry.title, "Entry from 9/8/2025");
        assert_eq!(entry.tags, vec!["rakhi", "family"]);

        assert!(diary.edit_entry(&id));
        assert_eq!(diary.page().tags, "rakhi, family");
        diary.page_mut().title = "Festival".into();
        assert_eq!(diary.save_entry(date()), Some(id.clone()));

        assert_eq!(diary.entries().len(), 1);
        let updated = &diary.entries()[0];
        assert_eq!(updated.title, "Festival");
        assert_eq!(updated.created_at, entry.created_at);
        assert!(updated.updated_at >= entry.updated_at);
    }

    #[test]
    fn test_entries_by_recent() {
        let mut diary = Diary::mount(Persistence::new(MemoryStore::new()));
        for title in ["first", "second"] {
            diary.start_new_entry();
            diary.page_mut().title = title.into();
            diary.save_entry(date());
        }
        let first_id = diary.entries()[0].id.clone();
        diary.edit_entry(&first_id);
        diary.page_mut().content = "touched".into();
        std::thread::sleep(std::time::Duration::from_millis(2));
        diary.save_entry(date());

        let recent = diary.entries_by_recent();
        assert_eq!(recent[0].title, "first");
    }
}
