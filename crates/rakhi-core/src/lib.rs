//! Rakhi Gift Core Library
//!
//! Local persistence, achievement tracking and the state machines behind
//! every widget of the gift application.
//!
//! ## Overview
//!
//! Each widget owns exactly one collection stored under a fixed key in a
//! local key-value store. Widgets load on mount, mutate in memory and write
//! the whole collection back after every change. The only state shared
//! between widgets is the achievement set, which is passed explicitly to the
//! operations that can unlock something.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rakhi_core::{AchievementTracker, MemoryStore, Persistence, TodoManager};
//! use rakhi_core::todo::Priority;
//!
//! let persistence = Persistence::new(MemoryStore::new());
//! let mut achievements = AchievementTracker::mount(persistence.clone());
//! let mut todos = TodoManager::basic(persistence);
//!
//! let id = todos
//!     .add("Tie the rakhi", Priority::High, None, None, &mut achievements)
//!     .expect("non-empty text");
//! todos.toggle(&id, &mut achievements);
//! assert!(achievements.contains("Task Completer"));
//! ```

pub mod achievements;
pub mod carousel;
pub mod collection;
pub mod config;
pub mod debounce;
pub mod diary;
pub mod error;
pub mod games;
pub mod journal;
pub mod logging;
pub mod messages;
pub mod mood;
pub mod notes;
pub mod photos;
pub mod shapes;
pub mod storage;
pub mod surprise;
pub mod theme;
pub mod todo;
pub mod types;

// Re-exports
pub use achievements::{Achievement, AchievementSink, AchievementTracker, Badge, Unlocked};
pub use carousel::Carousel;
pub use collection::{CollectionEditor, FormPhase, Record};
pub use config::GiftConfig;
pub use debounce::{DebounceTicket, Debouncer};
pub use diary::Diary;
pub use error::{GiftError, GiftResult};
pub use games::{GameId, GamePhase, HighScores};
pub use journal::Journal;
pub use messages::MessageWall;
pub use mood::{EnhancedMoodTracker, MoodTracker};
pub use notes::StickyNotes;
pub use photos::PhotoBoard;
pub use shapes::{Shape, ShapePoint};
pub use storage::{KeyValueStore, MemoryStore, Persistence, RedbStore};
pub use surprise::Surprise;
pub use theme::{Theme, ThemeCycle, THEMES};
pub use todo::TodoManager;
pub use types::{now_millis, ItemId, ItemIdGenerator};
