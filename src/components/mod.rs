//! UI components for the gift.
//!
//! One section per widget, plus the shared chrome around them.

mod achievement_panel;
mod board;
mod diary_section;
mod floating_elements;
mod games;
mod gift_header;
mod hero_section;
mod journal_section;
mod loading_screen;
mod message_wall;
mod mood_section;
mod photo_shapes;
mod sticky_notes;
mod surprise_section;
mod todo_section;

pub use achievement_panel::{AchievementButton, CelebrationOverlay};
pub use diary_section::DiarySection;
pub use floating_elements::{Confetti, CursorFollower, FloatingElements};
pub use games::GamesSection;
pub use gift_header::GiftHeader;
pub use hero_section::HeroSection;
pub use journal_section::JournalSection;
pub use loading_screen::LoadingScreen;
pub use message_wall::MessageWallSection;
pub use mood_section::MoodSection;
pub use photo_shapes::PhotoShapeSection;
pub use sticky_notes::StickyNotesSection;
pub use surprise_section::SurpriseSection;
pub use todo_section::TodoSection;
