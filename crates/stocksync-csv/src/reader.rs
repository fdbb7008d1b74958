//! CSV reading with library-default parsing

use std::fs::File;
use std::io::Read;
use std::path::Path;

use stocksync_common::{Result, SyncError};
use tracing::debug;

use crate::table::{Record, Table};

/// Load a table from a CSV file
///
/// Library defaults apply: comma delimiter, first row is the header, UTF-8.
/// A missing file is an I/O error; malformed content (e.g. an unterminated
/// quote or a row longer than the header) is a CSV error. Either terminates
/// the run.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .map_err(|e| SyncError::Io(format!("{}: {}", path.display(), e)))?;
    let table = read_table(file)?;
    debug!(
        rows = table.len(),
        columns = table.headers.len(),
        path = %path.display(),
        "loaded CSV table"
    );
    Ok(table)
}

/// Read a table from any reader carrying CSV content
pub fn read_table<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record::from_row(&headers, row.iter()));
    }

    Ok(Table { headers, records })
}
