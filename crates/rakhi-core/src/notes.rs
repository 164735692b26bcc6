//! Sticky notes board.
//!
//! Notes are placed in percent coordinates of the board and can be
//! dragged around inside it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, AchievementSink};
use crate::collection::{CollectionEditor, Record};
use crate::storage::{keys, Persistence};
use crate::types::{now_millis, ItemId};

/// Note colors as (name, hex)
pub const NOTE_COLORS: &[(&str, &str)] = &[
    ("yellow", "#fde047"),
    ("pink", "#f9a8d4"),
    ("blue", "#93c5fd"),
    ("green", "#86efac"),
    ("purple", "#d8b4fe"),
    ("orange", "#fdba74"),
    ("red", "#fca5a5"),
    ("indigo", "#a5b4fc"),
    ("teal", "#5eead4"),
    ("lime", "#bef264"),
    ("rose", "#fda4af"),
    ("cyan", "#67e8f9"),
];

/// Hex value for a note color name, falling back to the first color
pub fn note_color_hex(name: &str) -> &'static str {
    NOTE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
        .unwrap_or(NOTE_COLORS[0].1)
}

/// Largest x a note may be dragged to
pub const MAX_X: f64 = 85.0;
/// Largest y a note may be dragged to
pub const MAX_Y: f64 = 75.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl NoteSize {
    pub fn all() -> &'static [NoteSize] {
        &[NoteSize::Small, NoteSize::Medium, NoteSize::Large]
    }

    /// Edge length in pixels
    pub fn pixels(&self) -> u32 {
        match self {
            NoteSize::Small => 128,
            NoteSize::Medium => 160,
            NoteSize::Large => 192,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteSize::Small => "Small",
            NoteSize::Medium => "Medium",
            NoteSize::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: ItemId,
    pub text: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    #[serde(default)]
    pub size: NoteSize,
    pub created_at: i64,
}

impl Record for StickyNote {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

#[derive(Debug)]
pub struct StickyNotes {
    notes: CollectionEditor<StickyNote>,
}

impl StickyNotes {
    pub fn mount(persistence: Persistence) -> Self {
        Self {
            notes: CollectionEditor::mount(persistence, keys::STICKY_NOTES),
        }
    }

    pub fn notes(&self) -> &[StickyNote] {
        self.notes.items()
    }

    /// Pin a new note at a random spot. Blank text is rejected.
    pub fn create(
        &mut self,
        text: &str,
        color: &str,
        size: NoteSize,
        rng: &mut impl Rng,
        achievements: &mut dyn AchievementSink,
    ) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let x = rng.random_range(10.0..70.0);
        let y = rng.random_range(10.0..60.0);
        let rotation = rng.random_range(-10.0..=10.0);

        let id = self
            .notes
            .insert_with(|id| StickyNote {
                id,
                text: text.to_string(),
                color: color.to_string(),
                x,
                y,
                rotation,
                size,
                created_at: now_millis(),
            })
            .id
            .clone();

        tracing::debug!(%id, color, ?size, "Sticky note created");
        achievements.unlock(Achievement::StickyNoteCreator);
        Some(id)
    }

    /// Drag a note, keeping it on the board
    pub fn move_to(&mut self, id: &ItemId, x: f64, y: f64) -> bool {
        self.notes.update(id, |note| {
            note.x = x.clamp(0.0, MAX_X);
            note.y = y.clamp(0.0, MAX_Y);
        })
    }

    pub fn delete(&mut self, id: &ItemId) -> Option<StickyNote> {
        self.notes.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (StickyNotes, AchievementTracker, StdRng) {
        let persistence = Persistence::new(MemoryStore::new());
        (
            StickyNotes::mount(persistence.clone()),
            AchievementTracker::mount(persistence),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_create_places_inside_bounds() {
        let (mut notes, mut achievements, mut rng) = setup();
        for i in 0..50 {
            notes.create(&format!("note {i}"), "pink", NoteSize::Small, &mut rng, &mut achievements);
        }
        for note in notes.notes() {
            assert!((10.0..70.0).contains(&note.x));
            assert!((10.0..60.0).contains(&note.y));
            assert!((-10.0..=10.0).contains(&note.rotation));
        }
        assert!(achievements.contains("Sticky Note Creator"));
    }

    #[test]
    fn test_blank_note_rejected() {
        let (mut notes, mut achievements, mut rng) = setup();
        assert!(notes.create(" \n ", "yellow", NoteSize::Medium, &mut rng, &mut achievements).is_none());
        assert!(notes.notes().is_empty());
        assert!(achievements.is_empty());
    }

    #[test]
    fn test_move_is_clamped() {
        let (mut notes, mut achievements, mut rng) = setup();
        let id = notes
            .create("drag me", "blue", NoteSize::Large, &mut rng, &mut achievements)
            .unwrap();

        assert!(notes.move_to(&id, 120.0, -4.0));
        let note = &notes.notes()[0];
        assert_eq!((note.x, note.y), (MAX_X, 0.0));

        assert!(!notes.move_to(&ItemId::from_string("missing"), 1.0, 1.0));
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(note_color_hex("teal"), "#5eead4");
        assert_eq!(note_color_hex("plaid"), "#fde047");
    }
}
