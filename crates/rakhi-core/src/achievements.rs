//! Achievement tracking.
//!
//! The achievement set is the one piece of state shared between widgets.
//! It is owned by the shell and handed to widget operations as
//! `&mut dyn AchievementSink`, so every write goes through
//! [`AchievementSink::unlock`].
//!
//! Labels only ever accumulate: there is no removal path.

use serde::{Deserialize, Serialize};

use crate::storage::{keys, Persistence};

/// Every achievement a widget can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    FirstVisit,
    CelebrationMaster,
    LetterReader,
    MemoryExplorer,
    PhotoUploader,
    ShapeDesigner,
    TaskCreator,
    TaskCompleter,
    MessageWriter,
    MoodTracker,
    MoodTrackerMaster,
    JournalWriter,
    CreativeThinker,
    StickyNoteCreator,
    ThemeChanger,
    GameExplorer,
    GameMaster,
}

impl Achievement {
    /// The stored label
    pub fn label(&self) -> &'static str {
        match self {
            Achievement::FirstVisit => "First Visit",
            Achievement::CelebrationMaster => "Celebration Master",
            Achievement::LetterReader => "Letter Reader",
            Achievement::MemoryExplorer => "Memory Explorer",
            Achievement::PhotoUploader => "Photo Uploader",
            Achievement::ShapeDesigner => "Shape Designer",
            Achievement::TaskCreator => "Task Creator",
            Achievement::TaskCompleter => "Task Completer",
            Achievement::MessageWriter => "Message Writer",
            Achievement::MoodTracker => "Mood Tracker",
            Achievement::MoodTrackerMaster => "Mood Tracker Master",
            Achievement::JournalWriter => "Journal Writer",
            Achievement::CreativeThinker => "Creative Thinker",
            Achievement::StickyNoteCreator => "Sticky Note Creator",
            Achievement::ThemeChanger => "Theme Changer",
            Achievement::GameExplorer => "Game Explorer",
            Achievement::GameMaster => "Game Master",
        }
    }

    pub fn all() -> &'static [Achievement] {
        &[
            Achievement::FirstVisit,
            Achievement::CelebrationMaster,
            Achievement::LetterReader,
            Achievement::MemoryExplorer,
            Achievement::PhotoUploader,
            Achievement::ShapeDesigner,
            Achievement::TaskCreator,
            Achievement::TaskCompleter,
            Achievement::MessageWriter,
            Achievement::MoodTracker,
            Achievement::MoodTrackerMaster,
            Achievement::JournalWriter,
            Achievement::CreativeThinker,
            Achievement::StickyNoteCreator,
            Achievement::ThemeChanger,
            Achievement::GameExplorer,
            Achievement::GameMaster,
        ]
    }

    /// Badge shown for this achievement
    pub fn badge(&self) -> Badge {
        let (id, name, description, emoji) = match self {
            Achievement::FirstVisit => ("first-visit", "Welcome!", "Visited the website for the first time", "👋"),
            Achievement::CelebrationMaster => ("celebration", "Party Starter", "Triggered a celebration animation", "🎉"),
            Achievement::LetterReader => ("letter-reader", "Dear Sister", "Read the heartfelt letter", "💌"),
            Achievement::MemoryExplorer => ("memory-explorer", "Memory Lane", "Viewed the photo memories", "📸"),
            Achievement::PhotoUploader => ("photo-uploader", "Photo Artist", "Uploaded photos to the shape creator", "🖼️"),
            Achievement::ShapeDesigner => ("shape-designer", "Shape Master", "Arranged photos in a beautiful shape", "✨"),
            Achievement::TaskCreator => ("task-creator", "Goal Setter", "Added tasks to the todo manager", "📝"),
            Achievement::TaskCompleter => ("task-completer", "Achiever", "Completed tasks successfully", "✅"),
            Achievement::MessageWriter => ("message-writer", "Note Taker", "Left messages on the wall", "📮"),
            Achievement::MoodTracker => ("mood-tracker", "Self Aware", "Tracked daily mood", "😊"),
            Achievement::MoodTrackerMaster => ("mood-master", "Feelings Friend", "Shared a mood with a personal note", "🌈"),
            Achievement::JournalWriter => ("journal-writer", "Storyteller", "Wrote in the creative journal", "📔"),
            Achievement::CreativeThinker => ("creative-thinker", "Creative Mind", "Started a new journal entry", "💭"),
            Achievement::StickyNoteCreator => ("sticky-notes", "Note Sticker", "Pinned a sticky note", "🗒️"),
            Achievement::ThemeChanger => ("theme-changer", "Colour Splash", "Switched the rainbow theme", "🎨"),
            Achievement::GameExplorer => ("game-explorer", "Player One", "Opened a mini-game", "🕹️"),
            Achievement::GameMaster => ("game-master", "Game Master", "Finished a mini-game with a score", "🎮"),
        };
        Badge {
            id,
            name,
            description,
            emoji,
            requirement: self.label(),
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display data for an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    /// Label that unlocks this badge
    pub requirement: &'static str,
}

/// Result of an unlock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlocked {
    /// First time this label was unlocked
    New,
    /// Already present; nothing changed
    Already,
}

impl Unlocked {
    pub fn is_new(&self) -> bool {
        matches!(self, Unlocked::New)
    }
}

/// The single mutation entry point for the shared achievement set.
pub trait AchievementSink {
    fn unlock(&mut self, achievement: Achievement) -> Unlocked;
}

/// Persisted, append-only set of achievement labels.
#[derive(Debug)]
pub struct AchievementTracker {
    persistence: Persistence,
    labels: Vec<String>,
    celebrations: Vec<Badge>,
}

impl AchievementTracker {
    /// Load previously unlocked labels
    pub fn mount(persistence: Persistence) -> Self {
        let mut labels: Vec<String> = persistence.load(keys::ACHIEVEMENTS);
        let mut seen = std::collections::HashSet::new();
        labels.retain(|label| seen.insert(label.clone()));

        tracing::debug!(count = labels.len(), "Mounted achievements");

        Self {
            persistence,
            labels,
            celebrations: Vec::new(),
        }
    }

    /// Unlock a label. Idempotent.
    pub fn unlock_label(&mut self, label: &str) -> Unlocked {
        if self.contains(label) {
            return Unlocked::Already;
        }

        self.labels.push(label.to_string());
        self.persistence.save(keys::ACHIEVEMENTS, &self.labels);

        if let Some(badge) = Achievement::all()
            .iter()
            .map(Achievement::badge)
            .find(|badge| badge.requirement == label)
        {
            self.celebrations.push(badge);
        }

        tracing::info!(label, "Achievement unlocked");
        Unlocked::New
    }

    /// Unlocked labels in unlock order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether a celebration is waiting to be shown
    pub fn has_celebration(&self) -> bool {
        !self.celebrations.is_empty()
    }

    /// Take the oldest pending celebration, if any.
    ///
    /// A celebration is queued only when a label is unlocked for the first
    /// time, so re-unlocking never re-triggers the overlay.
    pub fn take_celebration(&mut self) -> Option<Badge> {
        if self.celebrations.is_empty() {
            None
        } else {
            Some(self.celebrations.remove(0))
        }
    }

    /// Full badge catalog paired with unlocked flags
    pub fn badges(&self) -> Vec<(Badge, bool)> {
        Achievement::all()
            .iter()
            .map(|a| (a.badge(), self.contains(a.label())))
            .collect()
    }

    /// Number of catalog badges unlocked
    pub fn unlocked_badges(&self) -> usize {
        self.badges().iter().filter(|(_, unlocked)| *unlocked).count()
    }

    /// Percent of the catalog unlocked
    pub fn progress_percent(&self) -> f64 {
        let total = Achievement::all().len();
        self.unlocked_badges() as f64 / total as f64 * 100.0
    }
}

impl AchievementSink for AchievementTracker {
    fn unlock(&mut self, achievement: Achievement) -> Unlocked {
        self.unlock_label(achievement.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn tracker() -> AchievementTracker {
        AchievementTracker::mount(Persistence::new(MemoryStore::new()))
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut tracker = tracker();

        assert_eq!(tracker.unlock(Achievement::JournalWriter), Unlocked::New);
        assert_eq!(tracker.len(), 1);

        assert_eq!(tracker.unlock(Achievement::JournalWriter), Unlocked::Already);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_celebration_only_on_first_unlock() {
        let mut tracker = tracker();

        tracker.unlock(Achievement::GameMaster);
        let badge = tracker.take_celebration().unwrap();
        assert_eq!(badge.name, "Game Master");
        assert!(tracker.take_celebration().is_none());

        tracker.unlock(Achievement::GameMaster);
        assert!(tracker.take_celebration().is_none());
    }

    #[test]
    fn test_unlocks_persist_across_mounts() {
        let persistence = Persistence::new(MemoryStore::new());
        {
            let mut tracker = AchievementTracker::mount(persistence.clone());
            tracker.unlock(Achievement::FirstVisit);
            tracker.unlock(Achievement::ThemeChanger);
        }

        let mut tracker = AchievementTracker::mount(persistence);
        assert_eq!(tracker.labels(), &["First Visit", "Theme Changer"]);
        // Restored labels do not celebrate again
        assert_eq!(tracker.unlock(Achievement::FirstVisit), Unlocked::Already);
        assert!(tracker.take_celebration().is_none());
    }

    #[test]
    fn test_unknown_labels_are_kept_without_badge() {
        let mut tracker = tracker();
        assert!(tracker.unlock_label("Secret Handshake").is_new());
        assert!(tracker.contains("Secret Handshake"));
        assert!(tracker.take_celebration().is_none());
        assert_eq!(tracker.unlocked_badges(), 0);
    }

    #[test]
    fn test_progress() {
        let mut tracker = tracker();
        assert_eq!(tracker.progress_percent(), 0.0);

        for achievement in Achievement::all() {
            tracker.unlock(*achievement);
        }
        assert_eq!(tracker.progress_percent(), 100.0);
    }

    #[test]
    fn test_badge_requirements_match_labels() {
        for achievement in Achievement::all() {
            assert_eq!(achievement.badge().requirement, achievement.label());
        }
    }
}
