#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use rakhi_core::logging::{LoggingBuilder, DEFAULT_FILTER};
use rakhi_core::{GiftConfig, MemoryStore, Persistence, RedbStore};
use tracing_subscriber::EnvFilter;

/// Settings resolved from the command line
static CONFIG: OnceLock<GiftConfig> = OnceLock::new();

/// Store shared by every widget
static PERSISTENCE: OnceLock<Persistence> = OnceLock::new();

/// Get the resolved settings (defaults if launched without `main`)
pub fn get_config() -> GiftConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Get the shared store, falling back to an in-memory one
pub fn get_persistence() -> Persistence {
    PERSISTENCE
        .get_or_init(|| Persistence::new(MemoryStore::new()))
        .clone()
}

/// Rakhi Gift - a Raksha Bandhan keepsake
#[derive(Parser, Debug)]
#[command(name = "rakhi-gift-desktop")]
#[command(about = "Rakhi Gift - a Raksha Bandhan keepsake for the family")]
struct Args {
    /// Data directory for the store and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Who the surprise letter is addressed to
    #[arg(short, long)]
    recipient: Option<String>,

    /// Keep everything in memory; nothing survives a restart
    #[arg(long)]
    in_memory: bool,

    /// Journal auto-save quiet period in milliseconds
    #[arg(long)]
    autosave_ms: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rakhi-gift")
}

fn resolve_config(args: Args) -> GiftConfig {
    let mut config = if args.in_memory {
        GiftConfig::default()
    } else {
        GiftConfig::with_data_dir(args.data_dir.unwrap_or_else(default_data_dir))
    };
    if let Some(recipient) = args.recipient {
        config.recipient = recipient;
    }
    if let Some(ms) = args.autosave_ms {
        config.autosave_delay = Duration::from_millis(ms);
    }
    config
}

fn init_logging(config: &GiftConfig) -> anyhow::Result<()> {
    match config.logs_dir() {
        Some(logs_dir) => {
            let path = LoggingBuilder::new(logs_dir).init()?;
            tracing::info!(path = %path.display(), "Session log");
        }
        None => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}

/// Open the redb store; a store that cannot be opened degrades to memory.
fn open_store(config: &GiftConfig) -> Persistence {
    let Some(path) = config.store_path() else {
        return Persistence::new(MemoryStore::new());
    };
    match RedbStore::open(&path) {
        Ok(store) => {
            tracing::info!(path = %path.display(), "Opened store");
            Persistence::new(store)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Falling back to in-memory store");
            Persistence::new(MemoryStore::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = resolve_config(Args::parse());
    init_logging(&config)?;

    tracing::info!(
        recipient = %config.recipient,
        data_dir = ?config.data_dir,
        "Starting Rakhi Gift"
    );

    let _ = PERSISTENCE.set(open_store(&config));
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Happy Raksha Bandhan")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_has_no_data_dir() {
        let args = Args::parse_from(["rakhi-gift-desktop", "--in-memory", "--recipient", "Sumi"]);
        let config = resolve_config(args);
        assert!(config.data_dir.is_none());
        assert_eq!(config.recipient, "Sumi");
    }

    #[test]
    fn test_explicit_data_dir_and_autosave() {
        let args = Args::parse_from([
            "rakhi-gift-desktop",
            "--data-dir",
            "/tmp/rakhi",
            "--autosave-ms",
            "500",
        ]);
        let config = resolve_config(args);
        assert_eq!(config.store_path(), Some(PathBuf::from("/tmp/rakhi/gift.redb")));
        assert_eq!(config.autosave_delay, Duration::from_millis(500));
    }
}
