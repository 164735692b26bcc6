use super::{Countdown, GamePhase};

pub const RAPID_TAP_SECONDS: u32 = 10;

/// Tap as often as possible before the clock runs out.
#[derive(Debug, Clone)]
pub struct RapidTap {
    taps: u32,
    countdown: Countdown,
    phase: GamePhase,
}

impl Default for RapidTap {
    fn default() -> Self {
        Self::new()
    }
}

impl RapidTap {
    pub fn new() -> Self {
        Self {
            taps: 0,
            countdown: Countdown::new(RAPID_TAP_SECONDS),
            phase: GamePhase::Idle,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn seconds_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The first tap starts the clock and does not count.
    pub fn tap(&mut self) {
        match self.phase {
            GamePhase::Idle if self.countdown.is_full() => self.phase = GamePhase::Active,
            GamePhase::Active => self.taps += 1,
            _ => {}
        }
    }

    /// One second passes. Returns the score when time runs out.
    pub fn tick(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Active {
            return None;
        }
        if self.countdown.tick() {
            self.phase = GamePhase::Complete;
            return Some(self.taps);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tap_starts_without_counting() {
        let mut game = RapidTap::new();
        game.tap();
        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.taps(), 0);

        game.tap();
        game.tap();
        assert_eq!(game.taps(), 2);
    }

    #[test]
    fn test_clock_only_runs_while_active() {
        let mut game = RapidTap::new();
        assert_eq!(game.tick(), None);
        assert_eq!(game.seconds_left(), RAPID_TAP_SECONDS);
    }

    #[test]
    fn test_score_is_tap_count() {
        let mut game = RapidTap::new();
        game.tap();
        for _ in 0..42 {
            game.tap();
        }
        let mut score = None;
        for _ in 0..RAPID_TAP_SECONDS {
            score = game.tick().or(score);
        }
        assert_eq!(score, Some(42));
        assert_eq!(game.phase(), GamePhase::Complete);

        game.tap();
        assert_eq!(game.taps(), 42);
    }
}
