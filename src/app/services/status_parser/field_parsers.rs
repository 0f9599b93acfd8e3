//! Cell cleaning and scalar parsers for status book fields
//!
//! Each parser is total over cleaned strings. Dates and flags report a
//! [`FieldOutcome`] so the record builder can tell a blank cell from a
//! malformed one without comparing error values.

use crate::constants::{CELL_DECORATION, TWO_DIGIT_YEAR_CUTOFF, yes_no};
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::num::ParseIntError;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Result of parsing one optional cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome<T> {
    /// The cell held a usable value
    Value(T),
    /// The cell was blank
    Empty,
    /// The cell held text that does not fit the column's type
    Invalid,
}

impl<T> FieldOutcome<T> {
    /// The parsed value, treating blank and malformed cells alike
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Empty | Self::Invalid => None,
        }
    }

    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value().unwrap_or_default()
    }
}

/// Strip the `="..."` wrapping and surrounding whitespace from a raw cell
///
/// `="01234"` becomes `01234`; a cell made only of decoration becomes empty.
pub fn clean_field(raw: &str) -> &str {
    raw.trim().trim_matches(CELL_DECORATION).trim()
}

/// Parse a month/day/two-digit-year date
///
/// The first three runs of digits are read as month, day and year, whatever
/// separates them. Fewer than three runs or a month outside 1-12 is invalid.
/// The day is not checked against the month: surplus days roll into the
/// following month (`2/31/85` is 1985-03-03) and day 0 is the last day of the
/// previous month.
pub fn parse_date(value: &str) -> FieldOutcome<NaiveDate> {
    if value.is_empty() {
        return FieldOutcome::Empty;
    }

    let runs: Vec<&str> = DIGIT_RUN
        .find_iter(value)
        .take(3)
        .map(|run| run.as_str())
        .collect();

    let [month, day, year] = runs.as_slice() else {
        return FieldOutcome::Invalid;
    };

    let (Ok(month), Ok(day), Ok(year)) = (month.parse::<u32>(), day.parse::<u64>(), year.parse::<u32>())
    else {
        return FieldOutcome::Invalid;
    };

    if !(1..=12).contains(&month) {
        return FieldOutcome::Invalid;
    }

    let date = expand_two_digit_year(year)
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
        .and_then(|first| first.checked_add_days(Days::new(day)))
        .and_then(|date| date.checked_sub_days(Days::new(1)));

    match date {
        Some(date) => FieldOutcome::Value(date),
        None => FieldOutcome::Invalid,
    }
}

/// Map a two-digit year onto a century: `0..=22` → 2000s, everything else → 1900s
pub fn expand_two_digit_year(year: u32) -> Option<i32> {
    let year = i32::try_from(year).ok()?;
    if year <= TWO_DIGIT_YEAR_CUTOFF as i32 {
        year.checked_add(2000)
    } else {
        year.checked_add(1900)
    }
}

/// Parse a case-insensitive "yes"/"no" flag
pub fn parse_yes_no(value: &str) -> FieldOutcome<bool> {
    let value = value.trim();
    if value.is_empty() {
        FieldOutcome::Empty
    } else if value.eq_ignore_ascii_case(yes_no::YES) {
        FieldOutcome::Value(true)
    } else if value.eq_ignore_ascii_case(yes_no::NO) {
        FieldOutcome::Value(false)
    } else {
        FieldOutcome::Invalid
    }
}

/// Parse a community identifier; a blank identifier is 0
pub fn parse_identifier(value: &str) -> Result<i64, ParseIntError> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse()
}
