//! Column layout of the status book CSV
//!
//! Every positional assumption about the source file is recorded in
//! [`SCHEMA`]. The record builder walks this table instead of indexing rows
//! with literals.

use crate::constants::COLUMN_COUNT;

/// Columns of the status book, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CommunityId,
    CommunityName,
    County,
    FhbmIdentified,
    FirmIdentified,
    CurrentEffectiveMapDate,
    RegularEmergencyDate,
    Tribal,
    CrsEntryDate,
    CurrentEffectiveDate,
    CurrentClass,
    PercentDiscountSfha,
    PercentNonSfha,
    Program,
    ParticipatingCommunity,
}

/// How a column's cleaned text becomes a record value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer identifier; blank loads as 0, malformed is fatal
    Identifier,
    /// Month/day/two-digit-year date; blank or malformed leaves the field absent
    Date,
    /// "yes"/"no" flag; blank or malformed leaves the field `false`
    YesNo,
    /// Kept verbatim
    Text,
}

/// One entry of the column table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: Column,
    /// Field name in exported JSON
    pub field: &'static str,
    /// Human-readable column label used in diagnostics
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn spec(column: Column, field: &'static str, label: &'static str, kind: FieldKind) -> ColumnSpec {
    ColumnSpec {
        column,
        field,
        label,
        kind,
    }
}

/// Index → field → parser table for the 15-column status book
pub const SCHEMA: [ColumnSpec; COLUMN_COUNT] = [
    spec(Column::CommunityId, "id", "community identifier", FieldKind::Identifier),
    spec(Column::CommunityName, "name", "community name", FieldKind::Text),
    spec(Column::County, "county", "county", FieldKind::Text),
    spec(Column::FhbmIdentified, "floodHazardIdentified", "initial FHBM identified", FieldKind::Date),
    spec(Column::FirmIdentified, "firmIdentified", "initial FIRM identified", FieldKind::Date),
    spec(Column::CurrentEffectiveMapDate, "currentEffectiveMapDate", "current effective map date", FieldKind::Date),
    spec(Column::RegularEmergencyDate, "regularEmergencyDate", "regular/emergency date", FieldKind::Date),
    spec(Column::Tribal, "tribal", "tribal", FieldKind::YesNo),
    spec(Column::CrsEntryDate, "crsEntryDate", "CRS entry date", FieldKind::Text),
    spec(Column::CurrentEffectiveDate, "currentEffectiveDate", "current effective date", FieldKind::Text),
    spec(Column::CurrentClass, "currentClass", "current class", FieldKind::Text),
    spec(Column::PercentDiscountSfha, "percentDiscountSFHA", "% discount SFHA", FieldKind::Text),
    spec(Column::PercentNonSfha, "percentNonSFHA", "% discount non-SFHA", FieldKind::Text),
    spec(Column::Program, "program", "program", FieldKind::Text),
    spec(Column::ParticipatingCommunity, "participatingCommunity", "participating community", FieldKind::YesNo),
];

impl Column {
    /// Zero-based position in a CSV row
    pub const fn index(self) -> usize {
        self as usize
    }
}
