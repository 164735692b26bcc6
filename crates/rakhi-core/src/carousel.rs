//! Hero photo carousel.

use std::time::Duration;

/// Number of memories shown in the hero section
pub const HERO_PHOTOS: usize = 20;

/// Horizontal travel, in pixels, that counts as a swipe
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Slideshow cadence while playing
pub const AUTO_ADVANCE: Duration = Duration::from_secs(3);

/// Greeting rotation cadence
pub const MESSAGE_ROTATION: Duration = Duration::from_secs(4);

/// Highest confetti intensity
pub const MAX_INTENSITY: u8 = 5;

pub const HERO_MESSAGES: &[&str] = &[
    "Happy Raksha Bandhan, Dearest Sisters (Sumi & Fuchi)! 💕✨",
    "From all your loving brothers - Baru, Chhotu, Ramu, Sofu, Jhamku & Piku! 🎀👨‍👦‍👦",
    "You light up our world, beautiful sisters! 🌟💖",
    "Our bond is stronger than any rainbow! 🌈💪",
    "You make every day magical, dear Sisters! ⭐🦋",
    "All brothers love you endlessly! 👭💝",
];

/// A memory slot in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    /// 1-based position
    pub number: usize,
    pub file_name: String,
    pub caption: String,
    pub year: String,
}

impl Memory {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            file_name: format!("image{number}.jpg"),
            caption: format!("Beautiful Memory #{number}"),
            year: (2009 + number).to_string(),
        }
    }
}

/// Wrap-around photo index with swipe handling
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    playing: bool,
    message: usize,
    intensity: u8,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(HERO_PHOTOS)
    }
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            playing: false,
            message: 0,
            intensity: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Memory {
        Memory::new(self.index + 1)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Apply a horizontal swipe from `start_x` to `end_x`.
    /// Swiping left shows the next photo, right the previous one.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) {
        let travel = start_x - end_x;
        if travel > SWIPE_THRESHOLD {
            self.next();
        } else if travel < -SWIPE_THRESHOLD {
            self.prev();
        }
    }

    /// Percent of the way through the album
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.len as f64 * 100.0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn message(&self) -> &'static str {
        HERO_MESSAGES[self.message]
    }

    pub fn rotate_message(&mut self) {
        self.message = (self.message + 1) % HERO_MESSAGES.len();
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Raise the confetti intensity, capped at [`MAX_INTENSITY`]
    pub fn celebrate(&mut self) -> u8 {
        self.intensity = (self.intensity + 1).min(MAX_INTENSITY);
        self.intensity
    }
}
