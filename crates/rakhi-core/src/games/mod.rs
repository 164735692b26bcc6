//! Mini-games and the persisted high score table.
//!
//! Every game moves `Idle -> Active -> Complete`. Time is driven from the
//! outside: the shell calls `tick()` once per second while a game is
//! mounted, and stops calling it when the game is closed. Nothing about a
//! game in progress is persisted; only final scores reach [`HighScores`].

mod memory;
mod quiz;
mod rapid_tap;
mod wish_collector;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, AchievementSink};
use crate::storage::{keys, Persistence};

pub use memory::{Card, FlipOutcome, MemoryMatch, MEMORY_EMOJIS, MEMORY_SECONDS, PAIR_REVEAL};
pub use quiz::{FamilyQuiz, Question, ANSWER_REVEAL, QUESTIONS};
pub use rapid_tap::{RapidTap, RAPID_TAP_SECONDS};
pub use wish_collector::{WishCollector, BLESSINGS, MAX_VISIBLE_WISHES, WISH_COLLECTOR_SECONDS, WISH_SPAWN_INTERVAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Memory,
    Quiz,
    RapidTap,
    WishCollector,
}

impl GameId {
    pub fn all() -> &'static [GameId] {
        &[GameId::Memory, GameId::Quiz, GameId::RapidTap, GameId::WishCollector]
    }

    /// Key used in the stored score table
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Memory => "memory",
            GameId::Quiz => "quiz",
            GameId::RapidTap => "rapidtap",
            GameId::WishCollector => "wishcollector",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameId::Memory => "Sister Memory Match",
            GameId::Quiz => "Family Love Quiz",
            GameId::RapidTap => "Rakhi Rapid Tap",
            GameId::WishCollector => "Wish Collector",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            GameId::Memory => "🧠",
            GameId::Quiz => "🤔",
            GameId::RapidTap => "👆",
            GameId::WishCollector => "✨",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameId::Memory => "Match the sister-themed pairs!",
            GameId::Quiz => "Test your family knowledge!",
            GameId::RapidTap => "Tap the rakhi as fast as you can!",
            GameId::WishCollector => "Collect blessings for your sister!",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Idle,
    Active,
    Complete,
}

/// Whole-second countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whether no second has elapsed yet
    pub fn is_full(&self) -> bool {
        self.remaining == self.total
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Count one second down. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.total;
    }
}

/// Best score per game, persisted as a JSON object keyed by game id.
#[derive(Debug)]
pub struct HighScores {
    persistence: Persistence,
    scores: BTreeMap<String, u32>,
}

impl HighScores {
    pub fn mount(persistence: Persistence) -> Self {
        let scores = persistence
            .load_value::<BTreeMap<String, u32>>(keys::GAME_STATS)
            .unwrap_or_default();
        Self {
            persistence,
            scores,
        }
    }

    /// A game was opened
    pub fn open(&self, game: GameId, achievements: &mut dyn AchievementSink) {
        tracing::debug!(game = game.as_str(), "Game opened");
        achievements.unlock(Achievement::GameExplorer);
    }

    /// Record a final score, keeping the best. Returns true on a new best.
    pub fn report(&mut self, game: GameId, score: u32, achievements: &mut dyn AchievementSink) -> bool {
        let best = self.scores.entry(game.as_str().to_string()).or_insert(0);
        let improved = score > *best;
        *best = (*best).max(score);
        self.persistence.save_value(keys::GAME_STATS, &self.scores);

        tracing::info!(game = game.as_str(), score, improved, "Game finished");
        achievements.unlock(Achievement::GameMaster);
        improved
    }

    pub fn best(&self, game: GameId) -> Option<u32> {
        self.scores.get(game.as_str()).copied()
    }

    /// Number of games with a recorded score
    pub fn games_played(&self) -> usize {
        self.scores.len()
    }

    pub fn total_score(&self) -> u32 {
        self.scores.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::MemoryStore;

    #[test]
    fn test_countdown() {
        let mut countdown = Countdown::new(2);
        assert!(countdown.is_full());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(countdown.is_expired());
        assert!(!countdown.tick());
        countdown.reset();
        assert_eq!(countdown.remaining(), 2);
    }

    #[test]
    fn test_high_score_keeps_maximum() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut achievements = AchievementTracker::mount(persistence.clone());
        let mut scores = HighScores::mount(persistence.clone());

        assert!(scores.report(GameId::Quiz, 66, &mut achievements));
        assert!(!scores.report(GameId::Quiz, 33, &mut achievements));
        assert_eq!(scores.best(GameId::Quiz), Some(66));
        assert!(achievements.contains("Game Master"));

        scores.report(GameId::RapidTap, 40, &mut achievements);
        let reloaded = HighScores::mount(persistence);
        assert_eq!(reloaded.games_played(), 2);
        assert_eq!(reloaded.total_score(), 106);
        assert_eq!(reloaded.best(GameId::Memory), None);
    }

    #[test]
    fn test_open_unlocks_explorer() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut achievements = AchievementTracker::mount(persistence.clone());
        HighScores::mount(persistence).open(GameId::Memory, &mut achievements);
        assert!(achievements.contains("Game Explorer"));
    }

    #[test]
    fn test_game_ids_match_stored_keys() {
        let json = serde_json::to_string(&GameId::WishCollector).unwrap();
        assert_eq!(json, "\"wishcollector\"");
        for game in GameId::all() {
            assert_eq!(serde_json::to_string(game).unwrap(), format!("\"{}\"", game.as_str()));
        }
    }
}
