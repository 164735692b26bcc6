//! Session logging with JSONL storage.
//!
//! Every run of the app appends its tracing events to one JSONL file under
//! the data directory, next to the usual console output:
//!
//! ```text
//! <data_dir>/logs/
//! ├── 2025-08-09_01J4Z7Q4VN.jsonl
//! └── 2025-08-10_01J52AW2C1.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use rakhi_core::logging::LoggingBuilder;
//!
//! let log_path = LoggingBuilder::new(data_dir.join("logs"))
//!     .with_filter("rakhi_gift=info,rakhi_core=debug")
//!     .init()?;
//! tracing::info!(path = %log_path.display(), "Logging to file");
//! ```
//!
//! ## Querying
//!
//! ```bash
//! # Every achievement unlocked across sessions
//! jq 'select(.msg == "Achievement unlocked") | .fields.label' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::{read_entries, SessionLogWriter};
