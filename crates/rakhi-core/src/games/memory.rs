use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Countdown, GamePhase};

pub const MEMORY_EMOJIS: &[&str] = &["💖", "🎀", "👭", "🌸", "🦋", "💝", "🌟", "💕"];

pub const MEMORY_SECONDS: u32 = 60;

/// How long a flipped pair stays face up before [`MemoryMatch::resolve`]
pub const PAIR_REVEAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Refused,
    /// First card of a pair is face up
    First,
    /// Second card is face up; resolve after [`PAIR_REVEAL`]
    Pair,
}

/// Pair matching against the clock.
#[derive(Debug, Clone)]
pub struct MemoryMatch {
    cards: Vec<Card>,
    flipped: Vec<usize>,
    matched: Vec<usize>,
    moves: u32,
    countdown: Countdown,
    phase: GamePhase,
    score: Option<u32>,
}

impl MemoryMatch {
    /// Deal a shuffled board. The clock starts right away.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            cards: deal(rng),
            flipped: Vec::new(),
            matched: Vec::new(),
            moves: 0,
            countdown: Countdown::new(MEMORY_SECONDS),
            phase: GamePhase::Active,
            score: None,
        }
    }

    pub fn restart(&mut self, rng: &mut impl Rng) {
        *self = Self::new(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.matched.contains(&index)
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seconds_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Final score, present only when every pair was found in time
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.phase != GamePhase::Active
            || index >= self.cards.len()
            || self.flipped.len() == 2
            || self.is_face_up(index)
            || self.countdown.is_expired()
        {
            return FlipOutcome::Refused;
        }

        self.flipped.push(index);
        if self.flipped.len() == 2 {
            self.moves += 1;
            FlipOutcome::Pair
        } else {
            FlipOutcome::First
        }
    }

    /// Settle the face-up pair. Returns the score if this finished the board.
    pub fn resolve(&mut self) -> Option<u32> {
        if self.flipped.len() != 2 {
            return None;
        }
        let (a, b) = (self.flipped[0], self.flipped[1]);
        self.flipped.clear();

        if self.cards[a].emoji != self.cards[b].emoji {
            return None;
        }
        self.matched.extend([a, b]);

        if self.matched.len() == self.cards.len() && self.phase == GamePhase::Active {
            let score = (100 - i64::from(self.moves) + 2 * i64::from(self.seconds_left())).max(10);
            let score = u32::try_from(score).unwrap_or(10);
            self.score = Some(score);
            self.phase = GamePhase::Complete;
            return Some(score);
        }
        None
    }

    /// One second passes. Running out of time ends the game without a score.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Active {
            return;
        }
        if self.countdown.tick() {
            self.flipped.clear();
            self.phase = GamePhase::Complete;
        }
    }
}

fn deal(rng: &mut impl Rng) -> Vec<Card> {
    let mut cards: Vec<Card> = MEMORY_EMOJIS
        .iter()
        .chain(MEMORY_EMOJIS)
        .copied()
        .enumerate()
        .map(|(id, emoji)| Card { id, emoji })
        .collect();
    cards.shuffle(rng);
    cards
}
