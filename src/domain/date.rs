//! Date resolution for user input and stored records
//!
//! User input accepts a small, ordered set of patterns. Stored records are
//! always ISO and are parsed with [`parse_iso`] only.

use chrono::NaiveDate;

use super::command::ParseError;

/// An accepted date text pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `YYYY-MM-DD`
    Iso,
    /// `D/M/YYYY` or `DD/MM/YYYY`, day and month may be one or two digits
    DayMonthYear,
}

impl DatePattern {
    /// Patterns in the order they are tried
    pub const ALL: [DatePattern; 2] = [DatePattern::Iso, DatePattern::DayMonthYear];

    /// Parses text that matches this pattern in full
    pub fn parse(self, text: &str) -> Option<NaiveDate> {
        match self {
            DatePattern::Iso => parse_iso(text),
            DatePattern::DayMonthYear => {
                let mut parts = text.split('/');
                let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
                if parts.next().is_some()
                    || !is_digits(day, 1..=2)
                    || !is_digits(month, 1..=2)
                    || !is_digits(year, 4..=4)
                {
                    return None;
                }
                // Out-of-range days such as 31/4/2024 are rejected, not clamped
                ymd(year, month, day)
            }
        }
    }
}

/// Resolves user-entered date text, trying each pattern in order
pub fn resolve(text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    DatePattern::ALL
        .iter()
        .find_map(|pattern| pattern.parse(text))
        .ok_or_else(|| ParseError::BadDateFormat(text.to_string()))
}

/// Parses a strict ISO calendar date (`YYYY-MM-DD`, zero-padded)
pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some()
        || !is_digits(year, 4..=4)
        || !is_digits(month, 2..=2)
        || !is_digits(day, 2..=2)
    {
        return None;
    }
    ymd(year, month, day)
}

/// Builds a date from digit-only parts; `None` if it is not on the calendar
fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
