//! Wowo - a grumpy line-oriented personal task tracker
//!
//! Users type short commands to add to-dos, deadlines and events, mark them
//! done, find and delete them. The list is saved to a plain text file after
//! every change.
//!
//! ```no_run
//! use wowo::{Config, Session};
//!
//! let mut session = Session::open(&Config::default());
//! let response = session.handle("todo Read book");
//! println!("{}", response);
//! ```

pub mod cli;
pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

pub use domain::{Command, ListError, ParseError, Task, TaskKind, TaskList};
pub use error::{Error, Result};
pub use session::{Response, Session};
pub use storage::{Config, StorageError, TaskFile};
