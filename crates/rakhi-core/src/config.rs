//! Runtime settings for the gift application.

use std::path::PathBuf;
use std::time::Duration;

/// Name shown on the surprise letter when none is given
pub const DEFAULT_RECIPIENT: &str = "Dearest Sisters";

/// Timing and location settings shared by the widgets
#[derive(Debug, Clone)]
pub struct GiftConfig {
    /// Where the store and logs live; `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
    /// Who the letter is addressed to
    pub recipient: String,
    /// Quiet period before the journal writes the form
    pub autosave_delay: Duration,
    /// How long an achievement celebration stays on screen
    pub celebration: Duration,
    /// How long short notices ("Copied!", appreciation) stay on screen
    pub notice: Duration,
    /// Theme switch animation
    pub theme_animation: Duration,
    /// One step of the loading screen progress bar
    pub loading_step: Duration,
    /// Confetti burst after opening the surprise
    pub confetti: Duration,
    /// Game countdown resolution
    pub game_tick: Duration,
    /// How often todo reminders are checked
    pub reminder_poll: Duration,
}

impl Default for GiftConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            recipient: DEFAULT_RECIPIENT.to_string(),
            autosave_delay: Duration::from_millis(2000),
            celebration: Duration::from_secs(3),
            notice: Duration::from_secs(2),
            theme_animation: Duration::from_millis(600),
            loading_step: Duration::from_millis(300),
            confetti: Duration::from_secs(3),
            game_tick: Duration::from_secs(1),
            reminder_poll: Duration::from_secs(60),
        }
    }
}

impl GiftConfig {
    /// Settings persisted under `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    pub fn store_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("gift.redb"))
    }

    pub fn logs_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("logs"))
    }

    /// Directory searched for the hero carousel's `imageN.jpg` files
    pub fn photos_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("photos"))
    }
}
