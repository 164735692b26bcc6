//! Mood tracking.
//!
//! Two trackers share the same rule: at most one entry per calendar day.
//! Recording again on the same day replaces that day's entry but keeps its
//! identifier.
//!
//! - [`MoodTracker`] scores moods by value and intensity and summarizes
//!   a day, a week or a month.
//! - [`EnhancedMoodTracker`] keeps a personal note, cheers sad days up with
//!   a joke and writes a weekly feedback line.

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, AchievementSink};
use crate::collection::{CollectionEditor, Record};
use crate::storage::{keys, Persistence};
use crate::types::{now_millis, ItemId};

/// Intensity used when none was recorded
pub const DEFAULT_INTENSITY: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub message: &'static str,
    /// Score from 1 (low) to 10 (high)
    pub value: u8,
}

pub const MOOD_OPTIONS: &[MoodOption] = &[
    MoodOption { name: "Amazing", emoji: "🌟", color: "#facc15", message: "You're shining bright today! Keep spreading that positive energy!", value: 10 },
    MoodOption { name: "Happy", emoji: "😊", color: "#4ade80", message: "Your smile is contagious! What a wonderful day to be you!", value: 8 },
    MoodOption { name: "Good", emoji: "😌", color: "#60a5fa", message: "You're doing great! Every step forward is progress!", value: 6 },
    MoodOption { name: "Okay", emoji: "😐", color: "#9ca3af", message: "It's okay to have neutral days. Tomorrow brings new possibilities!", value: 4 },
    MoodOption { name: "Tired", emoji: "😴", color: "#c084fc", message: "Rest is important. Take care of yourself, you deserve it!", value: 3 },
    MoodOption { name: "Sad", emoji: "😔", color: "#3b82f6", message: "It's okay to feel sad sometimes. You're stronger than you know!", value: 2 },
    MoodOption { name: "Stressed", emoji: "😰", color: "#fb923c", message: "Take a deep breath. You've overcome challenges before, and you will again!", value: 1 },
    MoodOption { name: "Excited", emoji: "🤩", color: "#f472b6", message: "Your excitement is infectious! Channel that energy into something amazing!", value: 9 },
];

pub fn mood_option(name: &str) -> Option<&'static MoodOption> {
    MOOD_OPTIONS.iter().find(|option| option.name == name)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: ItemId,
    pub mood: String,
    pub emoji: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub message: String,
    pub date: NaiveDate,
    pub created_at: i64,
    #[serde(default)]
    pub intensity: Option<u8>,
}

impl Record for MoodEntry {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Time window for a mood summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodWindow {
    Today,
    Week,
    Month,
}

impl MoodWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodWindow::Today => "today",
            MoodWindow::Week => "week",
            MoodWindow::Month => "month",
        }
    }

    pub fn all() -> &'static [MoodWindow] {
        &[MoodWindow::Today, MoodWindow::Week, MoodWindow::Month]
    }
}

/// Overall tone of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTone {
    Bright,
    Balanced,
    Gentle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub tone: MoodTone,
    pub average: f64,
    pub entries: usize,
    pub message: &'static str,
    pub emoji: &'static str,
}

/// Basic mood tracker with intensity scoring
#[derive(Debug)]
pub struct MoodTracker {
    moods: CollectionEditor<MoodEntry>,
}

impl MoodTracker {
    /// Load moods, skipping any stored entry that does not decode
    pub fn mount(persistence: Persistence) -> Self {
        Self {
            moods: CollectionEditor::mount_filtered(persistence, keys::MOODS),
        }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        self.moods.items()
    }

    /// Record today's mood, replacing an earlier entry for the same day.
    pub fn record(
        &mut self,
        option: &MoodOption,
        intensity: u8,
        day: NaiveDate,
        achievements: &mut dyn AchievementSink,
    ) -> ItemId {
        let intensity = intensity.clamp(1, 10);
        let existing = self.on(day).map(|entry| entry.id.clone());

        let build = |id: ItemId| MoodEntry {
            id,
            mood: option.name.to_string(),
            emoji: option.emoji.to_string(),
            color: option.color.to_string(),
            message: option.message.to_string(),
            date: day,
            created_at: now_millis(),
            intensity: Some(intensity),
        };

        let id = match existing {
            Some(id) => {
                self.moods.replace(build(id.clone()));
                id
            }
            None => self.moods.insert_with(build).id.clone(),
        };

        tracing::debug!(mood = option.name, intensity, "Mood recorded");
        achievements.unlock(Achievement::MoodTracker);
        id
    }

    /// Entry recorded on `day`
    pub fn on(&self, day: NaiveDate) -> Option<&MoodEntry> {
        self.moods.items().iter().find(|entry| entry.date == day)
    }

    /// Entries within the window ending at `today`, newest first
    pub fn window(&self, window: MoodWindow, today: NaiveDate) -> Vec<&MoodEntry> {
        let days = match window {
            MoodWindow::Today => return self.on(today).into_iter().collect(),
            MoodWindow::Week => 7,
            MoodWindow::Month => 30,
        };
        let start = today - Duration::days(days);
        let mut entries: Vec<_> = self
            .moods
            .items()
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= today)
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Summarize the window; `None` when nothing was recorded in it.
    ///
    /// The score of an entry is its mood value times its intensity.
    pub fn summary(&self, window: MoodWindow, today: NaiveDate) -> Option<MoodSummary> {
        let entries = self.window(window, today);
        if entries.is_empty() {
            return None;
        }

        let total: f64 = entries
            .iter()
            .map(|entry| {
                let value = mood_option(&entry.mood).map(|o| o.value).unwrap_or(5);
                let intensity = entry.intensity.unwrap_or(DEFAULT_INTENSITY);
                f64::from(value) * f64::from(intensity)
            })
            .sum();
        let average = total / entries.len() as f64;

        let (tone, message, emoji) = if average >= 7.0 {
            (MoodTone::Bright, "You're doing amazing! Keep up the positive vibes! 🌈", "😊")
        } else if average >= 5.0 {
            (MoodTone::Balanced, "You're doing well overall! Some ups and downs are normal. 🌤️", "🙂")
        } else {
            (MoodTone::Gentle, "It's been a tough stretch. Be gentle with yourself. 💙", "🤗")
        };

        Some(MoodSummary {
            tone,
            average,
            entries: entries.len(),
            message,
            emoji,
        })
    }

    pub fn delete(&mut self, id: &ItemId) -> Option<MoodEntry> {
        self.moods.delete(id)
    }

    pub fn clear(&mut self) {
        self.moods.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancedMoodOption {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub message: &'static str,
    pub encouragement: &'static str,
    /// Offer a joke when this mood is chosen
    pub joke: bool,
}

pub const ENHANCED_MOOD_OPTIONS: &[EnhancedMoodOption] = &[
    EnhancedMoodOption { name: "Ecstatic", emoji: "🤩", color: "#f59e0b", message: "You're absolutely radiant today! Your energy is contagious and inspiring! ✨🌟", encouragement: "Channel this amazing energy into something creative today!", joke: false },
    EnhancedMoodOption { name: "Happy", emoji: "😊", color: "#10b981", message: "Your beautiful smile lights up the world! Keep spreading that joy! 💖😊", encouragement: "Your happiness is a gift to everyone around you!", joke: false },
    EnhancedMoodOption { name: "Content", emoji: "😌", color: "#06b6d4", message: "Inner peace suits you perfectly! You're in such a wonderful place right now! 🕊️💙", encouragement: "This peaceful energy is exactly what you need. Enjoy this moment!", joke: false },
    EnhancedMoodOption { name: "Okay", emoji: "😐", color: "#64748b", message: "Every day doesn't have to be extraordinary, and that's perfectly okay! 🤗💝", encouragement: "Tomorrow brings new possibilities. Be gentle with yourself!", joke: false },
    EnhancedMoodOption { name: "Tired", emoji: "😴", color: "#6366f1", message: "Rest is not weakness, it's wisdom! Take the break you deserve! 💤🌙", encouragement: "Listen to your body. Self-care is the best care!", joke: false },
    EnhancedMoodOption { name: "Stressed", emoji: "😰", color: "#ef4444", message: "Take a deep breath, beautiful soul. This too shall pass! 🫧💪", encouragement: "You've overcome every challenge before. You're stronger than you know!", joke: false },
    EnhancedMoodOption { name: "Sad", emoji: "😔", color: "#4f46e5", message: "It's okay to feel sad sometimes. Your feelings are valid and you're not alone! 🤗💙", encouragement: "Sadness is just a visitor, not a permanent resident. Better days are coming!", joke: true },
    EnhancedMoodOption { name: "Anxious", emoji: "😨", color: "#ea580c", message: "You're braver than you believe and stronger than you seem! 🦋💛", encouragement: "Anxiety is just excitement without breath. Let's breathe together!", joke: true },
];

pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything! 😄 Just like how you make up my world with happiness!",
    "What do you call a bear with no teeth? A gummy bear! 🐻 Sweet just like you!",
    "Why did the scarecrow win an award? Because he was outstanding in his field! 🌾 Just like how you're outstanding in life!",
    "What do you call a sleeping bull? A bulldozer! 😴 Time to rest like a champion!",
    "Why don't eggs tell jokes? They'd crack each other up! 🥚 But you never fail to crack me up with joy!",
    "What's orange and sounds like a parrot? A carrot! 🥕 Silly, but it made you smile, right?",
    "Why did the math book look so sad? Because it had too many problems! 📚 Unlike you, who solves problems with grace!",
    "What do you call a dinosaur that crashes his car? Tyrannosaurus Wrecks! 🦕 But you always drive through life successfully!",
];

/// Moods counted as positive in the weekly feedback
const POSITIVE_MOODS: &[&str] = &["Ecstatic", "Happy", "Content"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    pub id: ItemId,
    pub mood: String,
    pub emoji: String,
    pub message: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    pub created_at: i64,
}

impl Record for MoodLogEntry {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// What the tracker shows right after a mood is picked
#[derive(Debug, Clone, PartialEq)]
pub struct MoodResponse {
    pub id: ItemId,
    pub message: &'static str,
    pub encouragement: &'static str,
    pub joke: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyFeedback {
    pub dominant_mood: String,
    pub positive_percent: u32,
    pub message: String,
}

/// Mood journal with notes, jokes and weekly feedback
#[derive(Debug)]
pub struct EnhancedMoodTracker {
    moods: CollectionEditor<MoodLogEntry>,
}

impl EnhancedMoodTracker {
    pub fn mount(persistence: Persistence) -> Self {
        Self {
            moods: CollectionEditor::mount(persistence, keys::ENHANCED_MOODS),
        }
    }

    pub fn entries(&self) -> &[MoodLogEntry] {
        self.moods.items()
    }

    pub fn on(&self, day: NaiveDate) -> Option<&MoodLogEntry> {
        self.moods.items().iter().find(|entry| entry.date == day)
    }

    /// Record the day's mood with an optional note.
    ///
    /// Re-recording on the same day keeps the entry's id and creation time.
    pub fn record(
        &mut self,
        option: &EnhancedMoodOption,
        note: &str,
        day: NaiveDate,
        rng: &mut impl Rng,
        achievements: &mut dyn AchievementSink,
    ) -> MoodResponse {
        let existing = self.on(day).map(|e| (e.id.clone(), e.created_at));
        let build = |id: ItemId, created_at: i64| MoodLogEntry {
            id,
            mood: option.name.to_string(),
            emoji: option.emoji.to_string(),
            message: option.message.to_string(),
            date: day,
            note: note.trim().to_string(),
            created_at,
        };

        let id = match existing {
            Some((id, created_at)) => {
                self.moods.replace(build(id.clone(), created_at));
                id
            }
            None => self.moods.insert_with(|id| build(id, now_millis())).id.clone(),
        };

        let joke = if option.joke {
            JOKES.choose(rng).copied()
        } else {
            None
        };

        tracing::debug!(mood = option.name, "Mood logged");
        achievements.unlock(Achievement::MoodTrackerMaster);

        MoodResponse {
            id,
            message: option.message,
            encouragement: option.encouragement,
            joke,
        }
    }

    /// Feedback over the seven days ending at `today`
    pub fn weekly_feedback(&self, today: NaiveDate) -> Option<WeeklyFeedback> {
        let start = today - Duration::days(7);
        let weekly: Vec<_> = self
            .moods
            .items()
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= today)
            .collect();
        if weekly.is_empty() {
            return None;
        }

        // Counts in order of first appearance
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for entry in &weekly {
            match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
                Some((_, count)) => *count += 1,
                None => counts.push((entry.mood.as_str(), 1)),
            }
        }

        // Ties go to the mood seen later
        let mut dominant = counts[0];
        for candidate in &counts[1..] {
            if candidate.1 >= dominant.1 {
                dominant = *candidate;
            }
        }
        let dominant_mood = dominant.0.to_string();

        let positive = weekly
            .iter()
            .filter(|entry| POSITIVE_MOODS.contains(&entry.mood.as_str()))
            .count();
        let positive_percent = ((positive as f64 / weekly.len() as f64) * 100.0).round() as u32;

        let message = if positive_percent >= 80 {
            format!("🌟 Amazing week! You've been radiating positivity {positive_percent}% of the time! Your dominant mood was \"{dominant_mood}\" - keep shining, beautiful!")
        } else if positive_percent >= 60 {
            format!("💖 Great week! You maintained positive energy {positive_percent}% of the time. Your most common mood was \"{dominant_mood}\". You're doing wonderfully!")
        } else if positive_percent >= 40 {
            format!("🌈 Balanced week! You experienced \"{dominant_mood}\" most often. Remember, it's okay to have ups and downs - that's what makes us human!")
        } else {
            format!("🤗 Challenging week with \"{dominant_mood}\" being most common. Remember, tough times don't last, but tough people like you do! You're amazing!")
        };

        Some(WeeklyFeedback {
            dominant_mood,
            positive_percent,
            message,
        })
    }

    pub fn delete(&mut self, id: &ItemId) -> Option<MoodLogEntry> {
        self.moods.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::{KeyValueStore, MemoryStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn setup() -> (Persistence, AchievementTracker) {
        let persistence = Persistence::new(MemoryStore::new());
        let achievements = AchievementTracker::mount(persistence.clone());
        (persistence, achievements)
    }

    fn enhanced(name: &str) -> &'static EnhancedMoodOption {
        ENHANCED_MOOD_OPTIONS.iter().find(|o| o.name == name).unwrap()
    }

    #[test]
    fn test_one_entry_per_day() {
        let (persistence, mut achievements) = setup();
        let mut tracker = MoodTracker::mount(persistence);

        let first = tracker.record(mood_option("Happy").unwrap(), 7, day(9), &mut achievements);
        let second = tracker.record(mood_option("Tired").unwrap(), 3, day(9), &mut achievements);

        assert_eq!(first, second);
        assert_eq!(tracker.entries().len(), 1);
        assert_eq!(tracker.entries()[0].mood, "Tired");
        assert!(achievements.contains("Mood Tracker"));

        tracker.record(mood_option("Good").unwrap(), 5, day(10), &mut achievements);
        assert_eq!(tracker.entries().len(), 2);
    }

    #[test]
    fn test_intensity_is_clamped() {
        let (persistence, mut achievements) = setup();
        let mut tracker = MoodTracker::mount(persistence);
        tracker.record(mood_option("Happy").unwrap(), 42, day(9), &mut achievements);
        assert_eq!(tracker.entries()[0].intensity, Some(10));
    }

    #[test]
    fn test_summary_windows() {
        let (persistence, mut achievements) = setup();
        let mut tracker = MoodTracker::mount(persistence);
        assert!(tracker.summary(MoodWindow::Today, day(20)).is_none());

        tracker.record(mood_option("Stressed").unwrap(), 1, day(1), &mut achievements);
        tracker.record(mood_option("Amazing").unwrap(), 5, day(20), &mut achievements);

        let today = tracker.summary(MoodWindow::Today, day(20)).unwrap();
        assert_eq!(today.entries, 1);
        assert_eq!(today.average, 50.0);
        assert_eq!(today.tone, MoodTone::Bright);

        let week = tracker.summary(MoodWindow::Week, day(20)).unwrap();
        assert_eq!(week.entries, 1);

        let month = tracker.summary(MoodWindow::Month, day(20)).unwrap();
        assert_eq!(month.entries, 2);
        assert_eq!(month.average, 25.5);
    }

    #[test]
    fn test_low_scores_are_gentle() {
        let (persistence, mut achievements) = setup();
        let mut tracker = MoodTracker::mount(persistence);
        tracker.record(mood_option("Stressed").unwrap(), 2, day(5), &mut achievements);
        let summary = tracker.summary(MoodWindow::Today, day(5)).unwrap();
        assert_eq!(summary.tone, MoodTone::Gentle);
    }

    #[test]
    fn test_invalid_stored_moods_are_skipped() {
        let store = MemoryStore::new();
        store
            .set(
                keys::MOODS,
                r#"[{"id":"1","mood":"Happy","emoji":"😊","date":"2025-08-09","created_at":0},{"mood":"broken"}]"#,
            )
            .unwrap();
        let tracker = MoodTracker::mount(Persistence::new(store));
        assert_eq!(tracker.entries().len(), 1);
        assert_eq!(tracker.entries()[0].intensity, None);
    }

    #[test]
    fn test_enhanced_keeps_id_and_created_at() {
        let (persistence, mut achievements) = setup();
        let mut tracker = EnhancedMoodTracker::mount(persistence);
        let mut rng = StdRng::seed_from_u64(7);

        let first = tracker.record(enhanced("Happy"), "sunny", day(9), &mut rng, &mut achievements);
        let created = tracker.entries()[0].created_at;
        let second = tracker.record(enhanced("Content"), " calm ", day(9), &mut rng, &mut achievements);

        assert_eq!(first.id, second.id);
        assert_eq!(tracker.entries().len(), 1);
        assert_eq!(tracker.entries()[0].created_at, created);
        assert_eq!(tracker.entries()[0].note, "calm");
        assert!(achievements.contains("Mood Tracker Master"));
    }

    #[test]
    fn test_jokes_only_for_joke_moods() {
        let (persistence, mut achievements) = setup();
        let mut tracker = EnhancedMoodTracker::mount(persistence);
        let mut rng = StdRng::seed_from_u64(1);

        let happy = tracker.record(enhanced("Happy"), "", day(1), &mut rng, &mut achievements);
        assert!(happy.joke.is_none());

        let sad = tracker.record(enhanced("Sad"), "", day(2), &mut rng, &mut achievements);
        assert!(JOKES.contains(&sad.joke.unwrap()));
    }

    #[test]
    fn test_weekly_feedback() {
        let (persistence, mut achievements) = setup();
        let mut tracker = EnhancedMoodTracker::mount(persistence);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(tracker.weekly_feedback(day(20)).is_none());

        tracker.record(enhanced("Happy"), "", day(15), &mut rng, &mut achievements);
        tracker.record(enhanced("Sad"), "", day(16), &mut rng, &mut achievements);
        tracker.record(enhanced("Happy"), "", day(17), &mut rng, &mut achievements);
        tracker.record(enhanced("Tired"), "", day(18), &mut rng, &mut achievements);
        // Outside the week
        tracker.record(enhanced("Sad"), "", day(1), &mut rng, &mut achievements);

        let feedback = tracker.weekly_feedback(day(20)).unwrap();
        assert_eq!(feedback.dominant_mood, "Happy");
        assert_eq!(feedback.positive_percent, 50);
        assert!(feedback.message.starts_with("🌈 Balanced week!"));
    }

    #[test]
    fn test_weekly_feedback_tie_goes_to_later_mood() {
        let (persistence, mut achievements) = setup();
        let mut tracker = EnhancedMoodTracker::mount(persistence);
        let mut rng = StdRng::seed_from_u64(3);

        tracker.record(enhanced("Happy"), "", day(18), &mut rng, &mut achievements);
        tracker.record(enhanced("Tired"), "", day(19), &mut rng, &mut achievements);

        let feedback = tracker.weekly_feedback(day(20)).unwrap();
        assert_eq!(feedback.dominant_mood, "Tired");
    }
}
