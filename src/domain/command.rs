//! Command parsing
//!
//! Turns one raw input line into a typed [`Command`]. The verb is the first
//! whitespace-delimited word; `bye` and `list` are matched case-insensitively,
//! every other verb is case-sensitive.
//!
//! ```text
//! list
//! find <keyword>
//! sort
//! todo <description>
//! deadline <description> /by <date>
//! event <description> /from <date> /to <date>
//! mark <index>
//! unmark <index>
//! delete <index>
//! bye
//! ```
//!
//! Indices are parsed but not range-checked; that is the task list's job.

use chrono::NaiveDate;
use thiserror::Error;

use super::date;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("The description cannot be empty. You know you need to do something.")]
    EmptyDescription,

    #[error("'{0}' is not a task number")]
    NonIntegerIndex(String),

    #[error("'{0}' is not a date I understand. Use yyyy-mm-dd (e.g. 2019-12-02) or d/m/yyyy.")]
    BadDateFormat(String),

    #[error("Unknown command: '{0}'. Stop speaking gibberish.")]
    UnknownCommand(String),

    #[error("'{0}' does not take any arguments")]
    UnexpectedArgument(String),
}

/// A parsed user request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Find(String),
    Sort,
    AddTodo {
        name: String,
    },
    AddDeadline {
        name: String,
        due: NaiveDate,
    },
    AddEvent {
        name: String,
        from: NaiveDate,
        to: NaiveDate,
    },
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Exit,
}

impl Command {
    /// Returns true if applying this command changes the task list
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::List | Command::Find(_) | Command::Exit)
    }
}

/// Parses one input line
///
/// Returns `Ok(None)` for blank input, which is not an error.
pub fn parse(input: &str) -> Result<Option<Command>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };

    let command = match verb {
        v if v.eq_ignore_ascii_case("bye") => no_arguments(v, rest, Command::Exit)?,
        v if v.eq_ignore_ascii_case("list") => no_arguments(v, rest, Command::List)?,
        "sort" => no_arguments(verb, rest, Command::Sort)?,
        "mark" => Command::Mark(parse_index(rest)?),
        "unmark" => Command::Unmark(parse_index(rest)?),
        "delete" => Command::Delete(parse_index(rest)?),
        "todo" => Command::AddTodo {
            name: required(rest)?.to_string(),
        },
        "find" => Command::Find(required(rest)?.to_string()),
        "deadline" => parse_deadline(rest)?,
        "event" => parse_event(rest)?,
        _ => return Err(ParseError::UnknownCommand(input.to_string())),
    };

    Ok(Some(command))
}

fn no_arguments(verb: &str, rest: &str, command: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::UnexpectedArgument(verb.to_string()))
    }
}

fn required(text: &str) -> Result<&str, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        Err(ParseError::EmptyDescription)
    } else {
        Ok(text)
    }
}

fn parse_index(text: &str) -> Result<i64, ParseError> {
    let text = required(text)?;
    text.parse()
        .map_err(|_| ParseError::NonIntegerIndex(text.to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command, ParseError> {
    let (name, due) = match rest.find(BY) {
        Some(pos) => (&rest[..pos], &rest[pos + BY.len()..]),
        None => (rest, ""),
    };

    let name = required(name)?.to_string();
    let due = date::resolve(due)?;
    Ok(Command::AddDeadline { name, due })
}

fn parse_event(rest: &str) -> Result<Command, ParseError> {
    let (name, from, to) = match rest.find(FROM) {
        Some(pos) => {
            let after = &rest[pos + FROM.len()..];
            match after.find(TO) {
                Some(to_pos) => (&rest[..pos], &after[..to_pos], &after[to_pos + TO.len()..]),
                None => (&rest[..pos], "", ""),
            }
        }
        // Without /from there is no start date, but /to may still be given
        None => {
            let to = rest.find(TO).map_or("", |pos| &rest[pos + TO.len()..]);
            (rest, "", to)
        }
    };

    let name = required(name)?.to_string();
    let from = date::resolve(from)?;
    let to = date::resolve(to)?;
    Ok(Command::AddEvent { name, from, to })
}
