//! # Storage Layer
//!
//! Persistence for wowo.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | Pipe-delimited records, one per line | `data/wowo.txt` (configurable) |
//! | Config | TOML | `~/.config/wowo/config.toml` |
//!
//! ## Failure Policy
//!
//! - Blank, short and unknown-tag lines are skipped on load
//! - A record with an unparsable date aborts the load with
//!   [`StorageError::CorruptRecord`]
//! - Every save rewrites the whole file (temp file + rename)
//!
//! ## Key Types
//!
//! - [`TaskFile`] - Load/save the task list
//! - [`record`] - Encode/decode single records
//! - [`Config`] - User configuration

mod config;
mod error;
mod file;
pub mod record;

pub use config::{Config, ConfigError, SortOrder};
pub use error::StorageError;
pub use file::{TaskFile, DEFAULT_PATH};
