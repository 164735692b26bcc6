//! Fixed colors shared by every theme.
//!
//! The rotating page gradient comes from `rakhi_core::THEMES`; these are the
//! constants layered on top of it.

#![allow(dead_code)]

// === GLASS (cards over the gradient) ===
pub const GLASS: &str = "rgba(255, 255, 255, 0.1)";
pub const GLASS_HOVER: &str = "rgba(255, 255, 255, 0.2)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.8)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.6)";
pub const TEXT_ON_PAPER: &str = "#1f2937";

// === FESTIVE ===
pub const GOLD: &str = "#facc15";
pub const ROSE: &str = "#fb7185";
pub const SAFFRON: &str = "#fb923c";

/// Confetti piece colors, cycled by index
pub const CONFETTI: &[&str] = &["#f472b6", "#facc15", "#60a5fa", "#4ade80", "#c084fc", "#fb923c"];

// === PRIORITY ===
pub const PRIORITY_LOW: &str = "#4ade80";
pub const PRIORITY_MEDIUM: &str = "#facc15";
pub const PRIORITY_HIGH: &str = "#f87171";

/// Color for a todo priority badge
pub fn priority_color(priority: rakhi_core::todo::Priority) -> &'static str {
    use rakhi_core::todo::Priority;
    match priority {
        Priority::Low => PRIORITY_LOW,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::High => PRIORITY_HIGH,
    }
}
