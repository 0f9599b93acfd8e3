//! Tests for JSON export

use super::*;
use crate::app::services::status_book::CommunityStatusCollection;
use crate::error::Error;
use serde_json::Value;
use std::io::{self, Write};

struct RejectingWriter;

impl Write for RejectingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_export_is_array_with_stable_field_names() {
    let collection = sample_collection();
    let mut buffer = Vec::new();

    collection.to_json_writer(&mut buffer).unwrap();

    assert_eq!(buffer.last(), Some(&b'\n'));
    let value: Value = serde_json::from_slice(&buffer).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 4);

    let anaheim = &array[0];
    assert_eq!(anaheim["id"], 60213);
    assert_eq!(anaheim["name"], "ANAHEIM CITY OF");
    assert_eq!(anaheim["floodHazardIdentified"], "1975-01-17");
    assert_eq!(anaheim["currentEffectiveMapDate"], "2009-12-03");
    assert_eq!(anaheim["tribal"], false);
    assert_eq!(anaheim["percentDiscountSFHA"], "15");
    assert_eq!(anaheim["percentNonSFHA"], "5");
    assert_eq!(anaheim["participatingCommunity"], true);
}

#[test]
fn test_export_absent_dates_are_null() {
    let collection = sample_collection();
    let value: Value = serde_json::from_str(&collection.to_json_string().unwrap()).unwrap();

    let houston = &value[2];
    assert!(houston["floodHazardIdentified"].is_null());
    assert!(houston["currentEffectiveMapDate"].is_null());
    assert_eq!(houston["firmIdentified"], "1970-12-11");
    // Text fields are always present
    assert_eq!(value[1]["crsEntryDate"], "");
}

#[test]
fn test_export_round_trip() {
    let collection = sample_collection();
    let mut buffer = Vec::new();
    collection.to_json_writer(&mut buffer).unwrap();

    let restored = CommunityStatusCollection::from_json_reader(buffer.as_slice()).unwrap();

    assert_eq!(restored, collection);
}

#[test]
fn test_pretty_export_parses_to_same_records() {
    let collection = sample_collection();
    let mut buffer = Vec::new();
    collection.to_json_pretty_writer(&mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.lines().count() > collection.len());

    let restored = CommunityStatusCollection::from_json_reader(text.as_bytes()).unwrap();
    assert_eq!(restored, collection);
}

#[test]
fn test_export_empty_collection() {
    let collection = CommunityStatusCollection::default();
    assert_eq!(collection.to_json_string().unwrap(), "[]");
}

#[test]
fn test_export_to_rejecting_sink_is_io_error() {
    let collection = sample_collection();

    let result = collection.to_json_writer(RejectingWriter);

    assert!(matches!(result, Err(Error::Io { .. })));
}
