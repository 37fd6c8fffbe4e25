//! Domain models for wowo
//!
//! Contains the task model, the task list and command parsing, without any
//! I/O concerns.

pub mod command;
pub mod date;
mod list;
mod task;

pub use command::{Command, ParseError};
pub use list::{ListError, TaskList};
pub use task::{Task, TaskKind};
