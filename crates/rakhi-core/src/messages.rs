//! Family message wall.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, AchievementSink};
use crate::collection::{CollectionEditor, Record};
use crate::storage::{keys, Persistence};
use crate::types::{now_millis, ItemId};

pub const BROTHERS: &[&str] = &["Baru", "Chhotu", "Ramu", "Sofu", "Piku"];

pub const SISTERS: &[&str] = &["Fuchi", "Sumi"];

/// Message card colors as (name, hex)
pub const MESSAGE_COLORS: &[(&str, &str)] = &[
    ("pink", "#f9a8d4"),
    ("purple", "#d8b4fe"),
    ("blue", "#93c5fd"),
    ("green", "#86efac"),
    ("yellow", "#fde047"),
    ("orange", "#fdba74"),
    ("red", "#fca5a5"),
    ("indigo", "#a5b4fc"),
    ("teal", "#5eead4"),
    ("rose", "#fda4af"),
];

pub const SHARE_HEADLINE: &str = "Check out our family love notes ! 💖";

/// Everyone who can sign a message, brothers first
pub fn family() -> impl Iterator<Item = &'static str> {
    BROTHERS.iter().chain(SISTERS).copied()
}

pub fn message_color_hex(name: &str) -> &'static str {
    MESSAGE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
        .unwrap_or(MESSAGE_COLORS[0].1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMessage {
    pub id: ItemId,
    pub text: String,
    pub author: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub created_at: i64,
}

impl Record for FamilyMessage {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

#[derive(Debug)]
pub struct MessageWall {
    messages: CollectionEditor<FamilyMessage>,
}

impl MessageWall {
    /// Load the wall. A wall that was never saved is seeded with one
    /// message from each brother.
    pub fn mount(persistence: Persistence, rng: &mut impl Rng) -> Self {
        if persistence.contains(keys::FAMILY_MESSAGES) {
            return Self {
                messages: CollectionEditor::mount(persistence, keys::FAMILY_MESSAGES),
            };
        }

        let now = now_millis();
        let seeded: Vec<FamilyMessage> = BROTHERS
            .iter()
            .enumerate()
            .map(|(index, brother)| FamilyMessage {
                id: ItemId::from_string(format!("default-{index}")),
                text: format!(
                    "Dear Fuchi, you're the best sister in the world! Love from {brother} 💖"
                ),
                author: brother.to_string(),
                color: MESSAGE_COLORS[index % MESSAGE_COLORS.len()].0.to_string(),
                x: rng.random_range(10.0..70.0),
                y: rng.random_range(10.0..60.0),
                rotation: rng.random_range(-10.0..=10.0),
                created_at: now,
            })
            .collect();

        tracing::info!(count = BROTHERS.len(), "Seeding family message wall");
        let messages = CollectionEditor::with_items(persistence, keys::FAMILY_MESSAGES, seeded);
        messages.persist();
        Self { messages }
    }

    pub fn messages(&self) -> &[FamilyMessage] {
        self.messages.items()
    }

    /// Pin a message; needs both text and an author.
    pub fn add(
        &mut self,
        text: &str,
        author: &str,
        rng: &mut impl Rng,
        achievements: &mut dyn AchievementSink,
    ) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() || author.is_empty() {
            return None;
        }

        let color = MESSAGE_COLORS
            .choose(rng)
            .map(|(name, _)| name.to_string())
            .unwrap_or_default();
        let x = rng.random_range(10.0..70.0);
        let y = rng.random_range(10.0..60.0);
        let rotation = rng.random_range(-10.0..=10.0);

        let id = self
            .messages
            .insert_with(|id| FamilyMessage {
                id,
                text: text.to_string(),
                author: author.to_string(),
                color,
                x,
                y,
                rotation,
                created_at: now_millis(),
            })
            .id
            .clone();

        tracing::debug!(%id, author, "Message pinned");
        achievements.unlock(Achievement::MessageWriter);
        Some(id)
    }

    /// Drop a message at a new spot on the wall
    pub fn move_to(&mut self, id: &ItemId, x: f64, y: f64) -> bool {
        self.messages.update(id, |message| {
            message.x = x;
            message.y = y;
        })
    }

    pub fn delete(&mut self, id: &ItemId) -> Option<FamilyMessage> {
        self.messages.delete(id)
    }

    /// Plain text summary of the wall for sharing
    pub fn share_text(&self) -> String {
        let mut text = String::from(SHARE_HEADLINE);
        for message in self.messages.items() {
            text.push_str("\n\n");
            text.push_str(&message.text);
            text.push_str(" - ");
            text.push_str(&message.author);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fresh_wall_is_seeded_once() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(5);

        let mut wall = MessageWall::mount(persistence.clone(), &mut rng);
        assert_eq!(wall.messages().len(), BROTHERS.len());
        assert_eq!(wall.messages()[0].id.as_str(), "default-0");
        assert_eq!(wall.messages()[4].author, "Piku");
        assert!(wall.messages()[1].text.ends_with("Love from Chhotu 💖"));

        // Deleting everything must not bring the seeds back
        let ids: Vec<_> = wall.messages().iter().map(|m| m.id.clone()).collect();
        for id in &ids {
            wall.delete(id);
        }
        let reloaded = MessageWall::mount(persistence, &mut rng);
        assert!(reloaded.messages().is_empty());
    }

    #[test]
    fn test_add_requires_text_and_author() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(9);
        let mut achievements = AchievementTracker::mount(persistence.clone());
        let mut wall = MessageWall::mount(persistence, &mut rng);

        assert!(wall.add("hello", "", &mut rng, &mut achievements).is_none());
        assert!(wall.add("  ", "Sumi", &mut rng, &mut achievements).is_none());
        assert!(!achievements.contains("Message Writer"));

        let id = wall.add(" Happy Rakhi! ", "Sumi", &mut rng, &mut achievements).unwrap();
        let message = wall.messages().last().unwrap();
        assert_eq!(message.id, id);
        assert_eq!(message.text, "Happy Rakhi!");
        assert!(MESSAGE_COLORS.iter().any(|(name, _)| *name == message.color));
        assert!(achievements.contains("Message Writer"));
    }

    #[test]
    fn test_move_and_share_text() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(1);
        let mut wall = MessageWall::mount(persistence, &mut rng);

        let id = ItemId::from_string("default-2");
        assert!(wall.move_to(&id, 95.0, 3.0));
        let moved = wall.messages().iter().find(|m| m.id == id).unwrap();
        assert_eq!((moved.x, moved.y), (95.0, 3.0));

        let share = wall.share_text();
        assert!(share.starts_with(SHARE_HEADLINE));
        assert!(share.contains("- Ramu"));
    }

    #[test]
    fn test_family_roster() {
        let names: Vec<_> = family().collect();
        assert_eq!(names.len(), 7);
        assert_eq!(names[5], "Fuchi");
    }
}
