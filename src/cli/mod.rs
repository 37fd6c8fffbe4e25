//! # Command-Line Interface
//!
//! Front-ends over [`Session::handle`](crate::session::Session::handle).
//!
//! ## Front-ends
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `repl` (default) | Read commands from stdin, one per line |
//! | `tui` | Full-screen chat interface |
//! | `run <words>...` | Handle one command and exit |
//! | `config` | Show or create the configuration file |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - One JSON object per response
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! wowo --verbose run list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod repl;
mod tui;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use repl::BOT_NAME;
