//! Status book CSV parser
//!
//! Turns the loosely formatted FEMA Community Status Book CSV into typed
//! [`CommunityStatus`](crate::app::models::CommunityStatus) records.
//!
//! ## Architecture
//!
//! - [`schema`] - The single column table: position, record field, parser kind
//! - [`field_parsers`] - Cell cleaning and the date, yes/no and identifier parsers
//! - [`record_parser`] - Builds one record from one CSV row
//! - [`parser`] - Drives the CSV reader over a file or any reader
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Error tiers
//!
//! A blank cell ([`FieldOutcome::Empty`]) and a malformed date or flag
//! ([`FieldOutcome::Invalid`]) leave the field absent or `false` and are only
//! counted. A malformed identifier, a row with the wrong number of columns or
//! an unreadable file aborts the whole load.
//!
//! ## Usage
//!
//! ```rust
//! use nfip_status::app::services::status_parser::parse_reader;
//!
//! # fn example() -> nfip_status::Result<()> {
//! let csv = "CID,Name,County,FHBM,FIRM,Map,RegEmer,Tribal,CRS,Eff,Class,SFHA,NonSFHA,Program,Participating\n\
//!            =\"060213\",ANAHEIM CITY OF,ORANGE COUNTY,01/17/75,09/15/83,12/03/09,09/15/83,No,,,,,,R,Yes\n";
//! let result = parse_reader(csv.as_bytes())?;
//! assert_eq!(result.collection.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use field_parsers::{FieldOutcome, clean_field, parse_date, parse_identifier, parse_yes_no};
pub use parser::{parse_file, parse_reader};
pub use record_parser::build_record;
pub use schema::{Column, ColumnSpec, FieldKind, SCHEMA};
pub use stats::{ParseResult, ParseStats};
