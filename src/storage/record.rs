//! Line-based record codec
//!
//! One task per line, pipe-delimited:
//!
//! ```text
//! T|<done>|<name>
//! D|<done>|<name>|<due>
//! E|<done>|<name>|<from>|<to>
//! ```
//!
//! `<done>` is `1` or `0` and dates are ISO (`yyyy-mm-dd`). Inside a name,
//! `\`, `|` and newlines are written as `\\`, `\|` and `\n`.
//!
//! Decoding is lenient about structure and strict about dates: short lines,
//! blank names and unknown tags are skipped, but a date that does not parse
//! aborts the whole decode.

use chrono::NaiveDate;

use super::StorageError;
use crate::domain::{date, Task, TaskKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Encodes one task as a record line (without the trailing newline)
pub fn encode(task: &Task) -> String {
    let done = if task.is_done() { 1 } else { 0 };
    let mut line = format!("{}|{}|{}", task.kind().tag(), done, escape(task.name()));

    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { due } => {
            line.push('|');
            line.push_str(&due.format(DATE_FORMAT).to_string());
        }
        TaskKind::Event { from, to } => {
            line.push('|');
            line.push_str(&from.format(DATE_FORMAT).to_string());
            line.push('|');
            line.push_str(&to.format(DATE_FORMAT).to_string());
        }
    }

    line
}

/// Encodes all tasks, one line each, every line newline-terminated
pub fn encode_all(tasks: &[Task]) -> String {
    tasks.iter().fold(String::new(), |mut out, task| {
        out.push_str(&encode(task));
        out.push('\n');
        out
    })
}

/// Decodes one record line
///
/// `line_no` is 1-based and only used for error reporting. Returns `Ok(None)`
/// for lines that are blank or structurally incomplete.
pub fn decode(line: &str, line_no: usize) -> Result<Option<Task>, StorageError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields = split_fields(line);
    if fields.len() < 3 {
        tracing::debug!(line = line_no, "Skipping incomplete record");
        return Ok(None);
    }

    let kind = match (fields[0].as_str(), fields.len()) {
        ("T", _) => TaskKind::Todo,
        ("D", n) if n >= 4 => TaskKind::Deadline {
            due: parse_date(&fields[3], line_no)?,
        },
        ("E", n) if n >= 5 => TaskKind::Event {
            from: parse_date(&fields[3], line_no)?,
            to: parse_date(&fields[4], line_no)?,
        },
        (tag, _) => {
            tracing::debug!(line = line_no, tag, "Skipping unknown or incomplete record");
            return Ok(None);
        }
    };

    let Ok(mut task) = Task::new(fields[2].as_str(), kind) else {
        tracing::debug!(line = line_no, "Skipping record with an empty name");
        return Ok(None);
    };
    if fields[1] == "1" {
        task.mark_done();
    }
    Ok(Some(task))
}

/// Decodes a whole file's content
pub fn decode_all(content: &str) -> Result<Vec<Task>, StorageError> {
    let mut tasks = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if let Some(task) = decode(line, index + 1)? {
            tasks.push(task);
        }
    }
    Ok(tasks)
}

fn parse_date(field: &str, line_no: usize) -> Result<NaiveDate, StorageError> {
    date::parse_iso(field).ok_or_else(|| StorageError::CorruptRecord {
        line: line_no,
        value: field.to_string(),
    })
}

fn escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Splits on unescaped pipes, unescapes and trims each field
///
/// Trailing empty fields are dropped, so `D|0|name|` has three fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '|' => fields.push(std::mem::take(&mut current)),
            '\\' => match chars.peek() {
                Some('\\') | Some('|') => current.extend(chars.next()),
                Some('n') => {
                    chars.next();
                    current.push('\n');
                }
                // Anything else is a literal backslash
                _ => current.push('\\'),
            },
            c => current.push(c),
        }
    }
    fields.push(current);

    let mut fields: Vec<String> = fields.into_iter().map(|f| f.trim().to_string()).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
