//! Color themes and the header's theme cycling.

use std::time::Duration;

use crate::achievements::{Achievement, AchievementSink};
use crate::debounce::{DebounceTicket, Debouncer};

/// A fixed, purely cosmetic palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Background gradient stops, top-left to bottom-right
    pub gradient: [&'static str; 3],
    pub accent: &'static str,
    pub secondary: &'static str,
}

impl Theme {
    /// CSS background for the page
    pub fn background_css(&self) -> String {
        let [from, via, to] = self.gradient;
        format!("linear-gradient(135deg, {from}, {via}, {to})")
    }
}

pub const THEMES: [Theme; 7] = [
    Theme { name: "Rainbow Pink", gradient: ["#ec4899", "#f43f5e", "#9333ea"], accent: "#be185d", secondary: "#e11d48" },
    Theme { name: "Rainbow Purple", gradient: ["#a855f7", "#8b5cf6", "#4f46e5"], accent: "#7e22ce", secondary: "#7c3aed" },
    Theme { name: "Rainbow Orange", gradient: ["#f97316", "#ef4444", "#db2777"], accent: "#c2410c", secondary: "#dc2626" },
    Theme { name: "Rainbow Blue", gradient: ["#06b6d4", "#3b82f6", "#9333ea"], accent: "#0e7490", secondary: "#2563eb" },
    Theme { name: "Rainbow Green", gradient: ["#22c55e", "#10b981", "#0891b2"], accent: "#15803d", secondary: "#059669" },
    Theme { name: "Rainbow Gold", gradient: ["#eab308", "#f97316", "#dc2626"], accent: "#a16207", secondary: "#ea580c" },
    Theme { name: "Rainbow Sunset", gradient: ["#ec4899", "#f97316", "#ca8a04"], accent: "#be185d", secondary: "#ea580c" },
];

/// Current theme plus the short animation played while switching.
///
/// Clicking again during the animation restarts it; only the last click
/// advances the theme.
#[derive(Debug)]
pub struct ThemeCycle {
    index: usize,
    animating: bool,
    animation: Debouncer,
}

impl ThemeCycle {
    pub fn new(animation: Duration) -> Self {
        Self {
            index: 0,
            animating: false,
            animation: Debouncer::new(animation),
        }
    }

    pub fn current(&self) -> &'static Theme {
        &THEMES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Start switching; advance with [`finish_change`](Self::finish_change)
    /// once the returned ticket fires.
    pub fn begin_change(&mut self, achievements: &mut dyn AchievementSink) -> DebounceTicket {
        self.animating = true;
        achievements.unlock(Achievement::ThemeChanger);
        self.animation.arm()
    }

    /// Move to the next theme and stop animating
    pub fn finish_change(&mut self) -> &'static Theme {
        self.index = (self.index + 1) % THEMES.len();
        self.animating = false;
        tracing::debug!(theme = THEMES[self.index].name, "Theme changed");
        self.current()
    }

    /// Drop any pending switch
    pub fn close(&mut self) {
        self.animation.close();
        self.animating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::{MemoryStore, Persistence};

    #[test]
    fn test_wraps_after_last_theme() {
        let mut cycle = ThemeCycle::new(Duration::from_millis(600));
        for _ in 0..THEMES.len() {
            cycle.finish_change();
        }
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current().name, "Rainbow Pink");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_clicks_advance_once() {
        let mut achievements = AchievementTracker::mount(Persistence::new(MemoryStore::new()));
        let mut cycle = ThemeCycle::new(Duration::from_millis(600));

        let first = cycle.begin_change(&mut achievements);
        let second = cycle.begin_change(&mut achievements);
        assert!(cycle.is_animating());

        assert!(!first.wait().await);
        if second.wait().await {
            cycle.finish_change();
        }
        assert_eq!(cycle.current().name, "Rainbow Purple");
        assert!(!cycle.is_animating());
        assert!(achievements.contains("Theme Changer"));
    }

    #[test]
    fn test_background_css() {
        assert_eq!(
            THEMES[4].background_css(),
            "linear-gradient(135deg, #22c55e, #10b981, #0891b2)"
        );
    }
}
