//! Tests for building one record from one row

use super::*;
use crate::app::services::status_parser::record_parser::build_record;
use crate::app::services::status_parser::schema::Column;
use crate::app::services::status_parser::stats::ParseStats;
use crate::error::Error;
use chrono::NaiveDate;

#[test]
fn test_build_record_full_row() {
    let mut stats = ParseStats::new();
    let record = build_record(&anaheim_row(), 2, &mut stats).unwrap();

    assert_eq!(record.id, 60213);
    assert_eq!(record.name, "ANAHEIM CITY OF");
    assert_eq!(record.county, "ORANGE COUNTY");
    assert_eq!(record.flood_hazard_identified, NaiveDate::from_ymd_opt(1975, 1, 17));
    assert_eq!(record.firm_identified, NaiveDate::from_ymd_opt(1983, 9, 15));
    assert_eq!(record.current_effective_map_date, NaiveDate::from_ymd_opt(2009, 12, 3));
    assert_eq!(record.regular_emergency_date, NaiveDate::from_ymd_opt(1983, 9, 15));
    assert!(!record.tribal);
    assert_eq!(record.crs_entry_date, "10/01/92");
    assert_eq!(record.current_effective_date, "05/01/17");
    assert_eq!(record.current_class, "7");
    assert_eq!(record.percent_discount_sfha, "15");
    assert_eq!(record.percent_non_sfha, "5");
    assert_eq!(record.program, "R");
    assert!(record.participating_community);

    assert_eq!(stats.dates_parsed, 4);
    assert_eq!(stats.flags_parsed, 2);
    assert!(stats.is_clean());
}

#[test]
fn test_build_record_blank_identifier_is_zero() {
    let mut stats = ParseStats::new();
    let row = with_cell(&anaheim_row(), Column::CommunityId.index(), "=\"\"");

    let record = build_record(&row, 5, &mut stats).unwrap();

    assert_eq!(record.id, 0);
    assert_eq!(stats.blank_identifiers, 1);
}

#[test]
fn test_build_record_invalid_identifier_is_fatal() {
    let mut stats = ParseStats::new();
    let row = with_cell(&anaheim_row(), Column::CommunityId.index(), "abc");

    let error = build_record(&row, 9, &mut stats).unwrap_err();

    match error {
        Error::InvalidIdentifier {
            row, column, value, ..
        } => {
            assert_eq!(row, 9);
            assert_eq!(column, "community identifier");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected InvalidIdentifier error, got {:?}", other),
    }
}

#[test]
fn test_build_record_wrong_column_count_is_fatal() {
    let mut stats = ParseStats::new();
    let short_row = row(&["=\"060213\"", "ANAHEIM CITY OF", "ORANGE COUNTY"]);

    let error = build_record(&short_row, 7, &mut stats).unwrap_err();

    assert!(matches!(
        error,
        Error::ColumnCount {
            row: 7,
            expected: 15,
            found: 3
        }
    ));
    assert_eq!(error.row(), Some(7));
}

#[test]
fn test_build_record_malformed_scalars_do_not_fail() {
    let mut stats = ParseStats::new();
    let base = anaheim_row();
    let row = with_cell(&base, Column::FhbmIdentified.index(), "N/A");
    let row = with_cell(&row, Column::CurrentEffectiveMapDate.index(), "13/45/99");
    let row = with_cell(&row, Column::Tribal.index(), "maybe");
    let row = with_cell(&row, Column::ParticipatingCommunity.index(), "");

    let record = build_record(&row, 3, &mut stats).unwrap();

    assert_eq!(record.flood_hazard_identified, None);
    assert_eq!(record.current_effective_map_date, None);
    assert!(record.firm_identified.is_some());
    assert!(!record.tribal);
    assert!(!record.participating_community);

    assert_eq!(stats.dates_invalid, 2);
    assert_eq!(stats.dates_parsed, 2);
    assert_eq!(stats.flags_invalid, 1);
    assert_eq!(stats.flags_empty, 1);
    assert!(!stats.is_clean());
}

#[test]
fn test_build_record_text_columns_are_cleaned_not_typed() {
    let mut stats = ParseStats::new();
    let row = with_cell(&anaheim_row(), Column::PercentDiscountSfha.index(), "=\"15\"");
    let row = with_cell(&row, Column::CurrentEffectiveDate.index(), "(NSFHA)");

    let record = build_record(&row, 2, &mut stats).unwrap();

    assert_eq!(record.percent_discount_sfha, "15");
    assert_eq!(record.current_effective_date, "(NSFHA)");
}
