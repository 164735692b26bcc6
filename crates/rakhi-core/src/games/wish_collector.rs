use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{Countdown, GamePhase};

pub const BLESSINGS: &[&str] = &[
    "💖 Happiness",
    "🌟 Success",
    "🌈 Joy",
    "🌺 Health",
    "✨ Prosperity",
    "🎯 Achievements",
    "🌸 Love",
    "🦋 Peace",
];

pub const WISH_COLLECTOR_SECONDS: u32 = 30;

/// Cadence at which new blessings appear
pub const WISH_SPAWN_INTERVAL: Duration = Duration::from_millis(1500);

/// No blessing spawns while this many are on screen
pub const MAX_VISIBLE_WISHES: usize = 8;

/// Collect blessings as they appear.
#[derive(Debug, Clone)]
pub struct WishCollector {
    wishes: Vec<&'static str>,
    collected: u32,
    countdown: Countdown,
    phase: GamePhase,
}

impl Default for WishCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl WishCollector {
    pub fn new() -> Self {
        Self {
            wishes: Vec::new(),
            collected: 0,
            countdown: Countdown::new(WISH_COLLECTOR_SECONDS),
            phase: GamePhase::Idle,
        }
    }

    /// Start, or start over
    pub fn start(&mut self) {
        *self = Self::new();
        self.phase = GamePhase::Active;
    }

    pub fn wishes(&self) -> &[&'static str] {
        &self.wishes
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn seconds_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Add a random blessing if there is room. Returns true if one spawned.
    pub fn spawn(&mut self, rng: &mut impl Rng) -> bool {
        if self.phase != GamePhase::Active || self.wishes.len() >= MAX_VISIBLE_WISHES {
            return false;
        }
        match BLESSINGS.choose(rng).copied() {
            Some(blessing) => {
                self.wishes.push(blessing);
                true
            }
            None => false,
        }
    }

    pub fn collect(&mut self, index: usize) -> bool {
        if self.phase != GamePhase::Active || index >= self.wishes.len() {
            return false;
        }
        self.wishes.remove(index);
        self.collected += 1;
        true
    }

    /// One second passes. Returns the score when time runs out.
    pub fn tick(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Active {
            return None;
        }
        if self.countdown.tick() {
            self.phase = GamePhase::Complete;
            return Some(self.collected * 10);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_caps_visible_wishes() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = WishCollector::new();
        assert!(!game.spawn(&mut rng));

        game.start();
        for _ in 0..20 {
            game.spawn(&mut rng);
        }
        assert_eq!(game.wishes().len(), MAX_VISIBLE_WISHES);
        assert!(game.wishes().iter().all(|w| BLESSINGS.contains(w)));
    }

    #[test]
    fn test_collect_and_score() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = WishCollector::new();
        game.start();
        game.spawn(&mut rng);
        game.spawn(&mut rng);
        game.spawn(&mut rng);

        let second = game.wishes()[1];
        assert!(game.collect(0));
        assert_eq!(game.wishes()[0], second);
        assert!(game.collect(0));
        assert!(!game.collect(5));

        let mut score = None;
        for _ in 0..WISH_COLLECTOR_SECONDS {
            score = game.tick().or(score);
        }
        assert_eq!(score, Some(20));
        assert!(!game.collect(0));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = WishCollector::new();
        game.start();
        game.spawn(&mut rng);
        game.collect(0);
        game.tick();

        game.start();
        assert_eq!(game.collected(), 0);
        assert!(game.wishes().is_empty());
        assert_eq!(game.seconds_left(), WISH_COLLECTOR_SECONDS);
        assert_eq!(game.phase(), GamePhase::Active);
    }
}
