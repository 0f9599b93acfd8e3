//! Shared test utilities and fixtures for status book parser tests

use csv::StringRecord;

pub mod record_parser_tests;

/// Header row as published by FEMA
pub const STATUS_BOOK_HEADER: &str = "CID,Community Name,County,Init FHBM Identified,Init FIRM Identified,Curr Eff Map Date,Reg-Emer Date,Tribal,CRS Entry Date,Curr Eff Date,Current Class,% Disc SFHA,% Disc Non SFHA,Program,Participating in NFIP";

/// Four-row status book covering clean, blank, malformed and century-edge cells
///
/// Row 2: fully populated. Row 3: blank FHBM date. Row 4: "N/A" dates and an
/// unrecognized tribal flag. Row 5: blank identifier, two-digit-year edges.
pub const SAMPLE_STATUS_BOOK: &str = "\
CID,Community Name,County,Init FHBM Identified,Init FIRM Identified,Curr Eff Map Date,Reg-Emer Date,Tribal,CRS Entry Date,Curr Eff Date,Current Class,% Disc SFHA,% Disc Non SFHA,Program,Participating in NFIP
=\"060213\",ANAHEIM CITY OF,ORANGE COUNTY,01/17/75,09/15/83,12/03/09,09/15/83,No,10/01/92,05/01/17,7,15,5,R,Yes
=\"180001\",ADAMS COUNTY*,INDIANA COUNTY,,06/05/85,06/05/85,06/05/85,No,,,,,,R,Yes
=\"485466\",HOUSTON CITY OF,HARRIS COUNTY,N/A,12/11/70,N/A,12/11/70,maybe,10/01/92,10/01/20,5,25,10,R,YES
=\"\",UNNAMED AREA,\"CLARK COUNTY, NV\",3/4/22,3/4/23,,,Yes,,,,,,E,no
";

/// Number of data rows in [`SAMPLE_STATUS_BOOK`]
pub const SAMPLE_ROW_COUNT: usize = 4;

/// Build a CSV row from raw cells
pub fn row(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

/// A well-formed 15-cell row for Anaheim
pub fn anaheim_row() -> StringRecord {
    row(&[
        "=\"060213\"",
        "ANAHEIM CITY OF",
        "ORANGE COUNTY",
        "01/17/75",
        "09/15/83",
        "12/03/09",
        "09/15/83",
        "No",
        "10/01/92",
        "05/01/17",
        "7",
        "15",
        "5",
        "R",
        "Yes",
    ])
}

/// Copy of `base` with one cell replaced
pub fn with_cell(base: &StringRecord, index: usize, value: &str) -> StringRecord {
    base.iter()
        .enumerate()
        .map(|(i, cell)| if i == index { value } else { cell })
        .collect()
}

/// Status book text with the given data lines appended to the header
pub fn status_book_with_rows(rows: &[&str]) -> String {
    let mut content = format!("{}\n", STATUS_BOOK_HEADER);
    for line in rows {
        content.push_str(line);
        content.push('\n');
    }
    content
}
