//! Core data model for the NFIP Community Status Book
//!
//! One [`CommunityStatus`] is produced per data row of the source CSV.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of one community enrolled in the National Flood Insurance Program
///
/// Dates are present only when the source cell held a usable date. The two
/// flags default to `false` when the source cell was blank or unrecognized.
/// The remaining text columns mix numbers and descriptions in the source and
/// are kept verbatim after cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStatus {
    /// Community identifier (CID). Blank identifiers load as 0; duplicates are kept.
    pub id: i64,

    /// Community name as published, e.g. "ANAHEIM, CITY OF"
    pub name: String,

    /// County (or counties) the community lies in
    pub county: String,

    /// Initial Flood Hazard Boundary Map identified
    pub flood_hazard_identified: Option<NaiveDate>,

    /// Initial Flood Insurance Rate Map identified
    pub firm_identified: Option<NaiveDate>,

    /// Current effective map date
    pub current_effective_map_date: Option<NaiveDate>,

    /// Date the community entered the regular or emergency program
    pub regular_emergency_date: Option<NaiveDate>,

    pub tribal: bool,

    /// Community Rating System entry date
    pub crs_entry_date: String,

    pub current_effective_date: String,

    /// Current CRS class
    pub current_class: String,

    /// Premium discount inside the Special Flood Hazard Area
    #[serde(rename = "percentDiscountSFHA")]
    pub percent_discount_sfha: String,

    /// Premium discount outside the Special Flood Hazard Area
    #[serde(rename = "percentNonSFHA")]
    pub percent_non_sfha: String,

    /// Program type, e.g. "R" (regular) or "E" (emergency)
    pub program: String,

    pub participating_community: bool,
}

impl CommunityStatus {
    /// Number of the four map dates that are present
    pub fn known_date_count(&self) -> usize {
        [
            self.flood_hazard_identified,
            self.firm_identified,
            self.current_effective_map_date,
            self.regular_emergency_date,
        ]
        .iter()
        .filter(|date| date.is_some())
        .count()
    }

    /// True when the community takes part in the Community Rating System
    pub fn in_rating_system(&self) -> bool {
        !self.crs_entry_date.is_empty()
    }
}
