//! Session controller
//!
//! A [`Session`] owns the task list and its backing file. Front-ends feed it
//! one line at a time through [`Session::handle`] and show the [`Response`].
//! Every successful change is written to disk before the response is returned.

use std::fmt;

use crate::domain::{command, Command, Task, TaskList};
use crate::error::Result;
use crate::storage::{Config, SortOrder, TaskFile};

const FAREWELL: &str = "Bye. Don't forget to do your chores!";

/// Outcome of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    message: String,
    is_error: bool,
    exit: bool,
}

impl Response {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            exit: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            exit: false,
        }
    }

    fn exit() -> Self {
        Self {
            message: FAREWELL.to_string(),
            is_error: false,
            exit: true,
        }
    }

    /// Response to blank input
    fn nothing() -> Self {
        Self::ok(String::new())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Returns true if the user asked to end the session
    pub fn is_exit(&self) -> bool {
        self.exit
    }

    /// Returns true if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// An interactive session over one task file
pub struct Session {
    tasks: TaskList,
    file: TaskFile,
    sort_order: SortOrder,
    warning: Option<String>,
}

impl Session {
    /// Creates a session from an already loaded list
    pub fn new(tasks: TaskList, file: TaskFile, sort_order: SortOrder) -> Self {
        Self {
            tasks,
            file,
            sort_order,
            warning: None,
        }
    }

    /// Opens a session, loading tasks from the configured file
    ///
    /// A load failure is not fatal: the session starts empty and the failure
    /// is kept as a one-time warning (see [`Session::take_warning`]).
    pub fn open(config: &Config) -> Self {
        let file = TaskFile::new(&config.data_file);

        let (tasks, warning) = match file.load() {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                tracing::warn!(path = %file.path().display(), error = %e, "Could not load tasks");
                (Vec::new(), Some(format!("Could not load previous data. {e}")))
            }
        };

        Self {
            tasks: TaskList::from_tasks(tasks, config.capacity),
            file,
            sort_order: config.sort_order,
            warning,
        }
    }

    /// Returns the startup warning, once
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn file(&self) -> &TaskFile {
        &self.file
    }

    /// Handles one line of input
    pub fn handle(&mut self, input: &str) -> Response {
        let command = match command::parse(input) {
            Ok(Some(command)) => command,
            Ok(None) => return Response::nothing(),
            Err(e) => return Response::error(e.to_string()),
        };

        tracing::debug!(?command, "Handling command");

        match self.apply(command) {
            Ok(response) => response,
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn apply(&mut self, command: Command) -> Result<Response> {
        let persist = command.is_mutation();

        let message = match command {
            Command::Exit => return Ok(Response::exit()),
            Command::List => {
                if self.tasks.is_empty() {
                    "Your list is empty. Enjoy it while it lasts.".to_string()
                } else {
                    let listed = self.tasks.iter().enumerate().map(|(i, t)| (i + 1, t));
                    format!("Your list:\n{}", numbered(listed))
                }
            }
            Command::Find(keyword) => {
                let matches = self.tasks.find(&keyword);
                if matches.is_empty() {
                    format!("No tasks match '{keyword}'.")
                } else {
                    format!(
                        "Here are the matching tasks in your list:\n{}",
                        numbered(matches.into_iter())
                    )
                }
            }
            Command::Sort => {
                match self.sort_order {
                    SortOrder::Date => self.tasks.sort_by_date(),
                    SortOrder::Name => self.tasks.sort_by_name(),
                }
                format!(
                    "Sorted by {}. Your list:\n{}",
                    self.sort_order.as_str(),
                    numbered(self.tasks.iter().enumerate().map(|(i, t)| (i + 1, t)))
                )
            }
            Command::AddTodo { name } => self.add(Task::todo(name)?)?,
            Command::AddDeadline { name, due } => self.add(Task::deadline(name, due)?)?,
            Command::AddEvent { name, from, to } => self.add(Task::event(name, from, to)?)?,
            Command::Mark(index) => {
                let task = self.tasks.mark_done(index)?;
                format!("Good! Now go back to work, I've marked:\n  {task}")
            }
            Command::Unmark(index) => {
                let task = self.tasks.mark_undone(index)?;
                format!("Hey, I thought you've done this. I'm unmarking:\n  {task}")
            }
            Command::Delete(index) => {
                let task = self.tasks.delete(index)?;
                format!(
                    "Noted. I've removed this task:\n  {task}\nNow you have {} tasks in the list.",
                    self.tasks.len()
                )
            }
        };

        if persist {
            self.file.save(self.tasks.as_slice())?;
        }

        Ok(Response::ok(message))
    }

    fn add(&mut self, task: Task) -> Result<String> {
        let line = self.tasks.add(task)?.to_string();
        Ok(format!(
            "Okay. I've added:\n  {line}\nYou have {} tasks. Must do them all.",
            self.tasks.len()
        ))
    }
}

fn numbered<'a>(tasks: impl Iterator<Item = (usize, &'a Task)>) -> String {
    tasks
        .map(|(index, task)| format!("{index}. {task}"))
        .collect::<Vec<_>>()
        .join("\n")
}
