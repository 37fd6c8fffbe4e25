//! Task domain model
//!
//! A task is a name plus a completion flag, and one of three kinds:
//! a plain to-do, a deadline with a due date, or an event spanning two dates.

use std::fmt;

use chrono::NaiveDate;

use super::command::ParseError;

/// Format used when showing dates to the user (e.g. `Dec 2 2019`)
const DISPLAY_DATE: &str = "%b %-d %Y";

/// Kind-specific part of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Plain to-do, no dates
    Todo,
    /// Must be done by `due`
    Deadline { due: NaiveDate },
    /// Spans `from` to `to` (the order of the two dates is not enforced)
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// Returns the single-letter tag used in listings and records
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Returns the date a task is ordered by, if it has one
    pub fn sort_date(&self) -> Option<NaiveDate> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline { due } => Some(*due),
            TaskKind::Event { from, .. } => Some(*from),
        }
    }
}

/// A single tracked task
///
/// The name is fixed at construction. The done flag is the only mutable
/// state and changes only through [`Task::mark_done`] and [`Task::mark_undone`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a new, not-done task. The name is trimmed.
    ///
    /// Fails with [`ParseError::EmptyDescription`] when nothing is left of
    /// the name after trimming.
    pub fn new(name: impl Into<String>, kind: TaskKind) -> Result<Self, ParseError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyDescription);
        }
        let name = if trimmed.len() == name.len() {
            name
        } else {
            trimmed.to_string()
        };

        Ok(Self {
            name,
            done: false,
            kind,
        })
    }

    /// Creates a to-do
    pub fn todo(name: impl Into<String>) -> Result<Self, ParseError> {
        Self::new(name, TaskKind::Todo)
    }

    /// Creates a deadline
    pub fn deadline(name: impl Into<String>, due: NaiveDate) -> Result<Self, ParseError> {
        Self::new(name, TaskKind::Deadline { due })
    }

    /// Creates an event
    pub fn event(
        name: impl Into<String>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Self, ParseError> {
        Self::new(name, TaskKind::Event { from, to })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Marks the task as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the task as not done
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Returns true if the keyword occurs in the name, ignoring case
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }

    fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.kind.tag(), self.status_icon(), self.name)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", due.format(DISPLAY_DATE)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                from.format(DISPLAY_DATE),
                to.format(DISPLAY_DATE)
            ),
        }
    }
}
