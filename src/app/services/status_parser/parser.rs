//! Status book parser orchestration
//!
//! Reads the whole CSV into memory row by row, discarding the header, and
//! aborts on the first fatal row. No partial collection is ever returned.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::record_parser::build_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::services::status_book::CommunityStatusCollection;
use crate::constants::COLUMN_COUNT;
use crate::error::{Error, Result};

/// Parse a status book file from disk
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    info!("Parsing status book: {}", path.display());

    let file = File::open(path).map_err(|e| {
        Error::io(format!("Failed to open status book {}", path.display()), e)
    })?;

    parse_reader(BufReader::new(file))
}

/// Parse status book CSV from any reader
///
/// Quoting is permissive and cells are decoded lossily, so stray quotes or
/// non-UTF-8 bytes in free text never abort a load.
pub fn parse_reader<R: Read>(reader: R) -> Result<ParseResult> {
    let start_time = Instant::now();

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header_len = csv_reader
        .byte_headers()
        .map_err(|source| Error::Csv { row: 1, source })?
        .len();
    if header_len != COLUMN_COUNT {
        warn!(
            "Status book header has {} columns, expected {}",
            header_len, COLUMN_COUNT
        );
    }

    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    // Header is row 1
    for (index, row) in csv_reader.byte_records().enumerate() {
        let row_number = index + 2;
        let row = row.map_err(|source| Error::Csv {
            row: row_number,
            source,
        })?;
        let row = csv::StringRecord::from_byte_record_lossy(row);

        records.push(build_record(&row, row_number, &mut stats)?);
    }

    stats.rows_parsed = records.len();

    if !stats.is_clean() {
        debug!(
            "{} malformed date cells and {} malformed yes/no cells left blank",
            stats.dates_invalid, stats.flags_invalid
        );
    }

    info!(
        "Parsed {} community records in {:.2}s",
        stats.rows_parsed,
        start_time.elapsed().as_secs_f64()
    );

    Ok(ParseResult {
        collection: CommunityStatusCollection::new(records),
        stats,
    })
}
