//! Builds one [`CommunityStatus`] from one status book row
//!
//! Cells are cleaned first, then each column is handled according to its
//! [`FieldKind`] in [`SCHEMA`]. Only the identifier can fail a row.

use chrono::NaiveDate;
use csv::StringRecord;

use super::field_parsers::{clean_field, parse_date, parse_identifier, parse_yes_no};
use super::schema::{Column, FieldKind, SCHEMA};
use super::stats::ParseStats;
use crate::app::models::CommunityStatus;
use crate::constants::COLUMN_COUNT;
use crate::error::{Error, Result};

/// Build a record from a raw CSV row
///
/// `row_number` counts the header as row 1 and is carried in every error.
///
/// # Errors
/// * [`Error::ColumnCount`] if the row does not have exactly 15 cells
/// * [`Error::InvalidIdentifier`] if the identifier cell is not an integer
pub fn build_record(
    row: &StringRecord,
    row_number: usize,
    stats: &mut ParseStats,
) -> Result<CommunityStatus> {
    if row.len() != COLUMN_COUNT {
        return Err(Error::ColumnCount {
            row: row_number,
            expected: COLUMN_COUNT,
            found: row.len(),
        });
    }

    let cells: Vec<&str> = row.iter().map(clean_field).collect();
    let mut record = CommunityStatus::default();

    for spec in &SCHEMA {
        let cell = cells[spec.column.index()];

        match spec.kind {
            FieldKind::Identifier => {
                record.id = parse_identifier(cell).map_err(|source| Error::InvalidIdentifier {
                    row: row_number,
                    column: spec.label,
                    value: cell.to_string(),
                    source,
                })?;
                if cell.is_empty() {
                    stats.blank_identifiers += 1;
                }
            }
            FieldKind::Date => {
                let outcome = parse_date(cell);
                stats.record_date(&outcome);
                if let Some(slot) = date_field(&mut record, spec.column) {
                    *slot = outcome.value();
                }
            }
            FieldKind::YesNo => {
                let outcome = parse_yes_no(cell);
                stats.record_flag(&outcome);
                if let Some(slot) = flag_field(&mut record, spec.column) {
                    *slot = outcome.value_or_default();
                }
            }
            FieldKind::Text => {
                if let Some(slot) = text_field(&mut record, spec.column) {
                    *slot = cell.to_string();
                }
            }
        }
    }

    Ok(record)
}

fn date_field(record: &mut CommunityStatus, column: Column) -> Option<&mut Option<NaiveDate>> {
    match column {
        Column::FhbmIdentified => Some(&mut record.flood_hazard_identified),
        Column::FirmIdentified => Some(&mut record.firm_identified),
        Column::CurrentEffectiveMapDate => Some(&mut record.current_effective_map_date),
        Column::RegularEmergencyDate => Some(&mut record.regular_emergency_date),
        _ => None,
    }
}

fn flag_field(record: &mut CommunityStatus, column: Column) -> Option<&mut bool> {
    match column {
        Column::Tribal => Some(&mut record.tribal),
        Column::ParticipatingCommunity => Some(&mut record.participating_community),
        _ => None,
    }
}

fn text_field(record: &mut CommunityStatus, column: Column) -> Option<&mut String> {
    match column {
        Column::CommunityName => Some(&mut record.name),
        Column::County => Some(&mut record.county),
        Column::CrsEntryDate => Some(&mut record.crs_entry_date),
        Column::CurrentEffectiveDate => Some(&mut record.current_effective_date),
        Column::CurrentClass => Some(&mut record.current_class),
        Column::PercentDiscountSfha => Some(&mut record.percent_discount_sfha),
        Column::PercentNonSfha => Some(&mut record.percent_non_sfha),
        Column::Program => Some(&mut record.program),
        _ => None,
    }
}
