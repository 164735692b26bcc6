//! Shared state for the gift's widgets.
//!
//! Each widget owns its own collection; only the achievement set and the
//! theme are shared, and both live in context signals provided by `App`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut achievements = use_achievements();
//! let mut todos = use_signal(|| TodoManager::basic(persistence()));
//!
//! todos.write().add(&text, priority, None, None, &mut *achievements.write());
//! ```

use dioxus::prelude::*;
use rakhi_core::{AchievementTracker, GiftConfig, Persistence, ThemeCycle};

/// Settings resolved at startup
pub fn config() -> GiftConfig {
    crate::get_config()
}

/// The store every widget mounts against
pub fn persistence() -> Persistence {
    crate::get_persistence()
}

/// Hook to access the shared achievement set.
///
/// Pass `&mut *achievements.write()` to any operation that can unlock
/// something.
pub fn use_achievements() -> Signal<AchievementTracker> {
    use_context::<Signal<AchievementTracker>>()
}

/// Hook to access the active theme
pub fn use_theme() -> Signal<ThemeCycle> {
    use_context::<Signal<ThemeCycle>>()
}

/// Copy text to the desktop clipboard. Failures are only logged.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Clipboard unavailable");
            false
        }
    }
}
