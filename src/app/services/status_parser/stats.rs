//! Parse statistics and result structures for status book loading
//!
//! Blank and malformed cells never fail a load; they are tallied here so a
//! caller can judge how dirty a given edition of the file was.

use super::field_parsers::FieldOutcome;
use crate::app::services::status_book::CommunityStatusCollection;
use serde::{Deserialize, Serialize};

/// Parsed collection with statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub collection: CommunityStatusCollection,
    pub stats: ParseStats,
}

/// Per-load tallies of cell outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows turned into records (header excluded)
    pub rows_parsed: usize,

    /// Rows whose identifier cell was blank and loaded as 0
    pub blank_identifiers: usize,

    pub dates_parsed: usize,
    pub dates_empty: usize,
    /// Non-blank date cells that could not be read as a date
    pub dates_invalid: usize,

    pub flags_parsed: usize,
    pub flags_empty: usize,
    /// Non-blank yes/no cells holding some other token
    pub flags_invalid: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_date<T>(&mut self, outcome: &FieldOutcome<T>) {
        match outcome {
            FieldOutcome::Value(_) => self.dates_parsed += 1,
            FieldOutcome::Empty => self.dates_empty += 1,
            FieldOutcome::Invalid => self.dates_invalid += 1,
        }
    }

    pub fn record_flag<T>(&mut self, outcome: &FieldOutcome<T>) {
        match outcome {
            FieldOutcome::Value(_) => self.flags_parsed += 1,
            FieldOutcome::Empty => self.flags_empty += 1,
            FieldOutcome::Invalid => self.flags_invalid += 1,
        }
    }

    /// Total cells that held malformed text
    pub fn invalid_cells(&self) -> usize {
        self.dates_invalid + self.flags_invalid
    }

    /// Percentage of non-blank date cells that were malformed
    pub fn invalid_date_rate(&self) -> f64 {
        let non_blank = self.dates_parsed + self.dates_invalid;
        if non_blank == 0 {
            0.0
        } else {
            (self.dates_invalid as f64 / non_blank as f64) * 100.0
        }
    }

    /// True when every non-blank date and flag cell parsed
    pub fn is_clean(&self) -> bool {
        self.invalid_cells() == 0
    }
}
