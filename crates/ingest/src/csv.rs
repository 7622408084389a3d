// CSV ingestion of inventory rows

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use stocktake_inventory::Record;

/// Field count of a well-formed row: name, code, quantity, expiration.
const FIELDS_PER_ROW: usize = 4;

/// File-level ingestion failure.
///
/// Row-level problems are not errors: malformed rows are skipped and
/// reported through the log (see [`read_records`]).
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Read inventory records from a comma-delimited file.
///
/// The first row is a header and is skipped. A row is malformed when it
/// does not carry exactly four fields, when its quantity is not a
/// non-negative integer, or when its expiration is not a `yyyy-mm-dd`
/// date; malformed rows are skipped with a `warn!` naming the row, and
/// never surface to the caller.
///
/// Returns the rows as parsed - duplicates included. Consolidation is the
/// caller's step.
pub fn read_records(path: &Path) -> Result<Vec<Record>, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| IngestError::Read {
            path: path.display().to_string(),
            source,
        })?;

        match parse_row(&row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                let raw = row.iter().collect::<Vec<_>>().join(",");
                warn!(row = %raw, %reason, "skipping row not matching the expected format");
            }
        }
    }

    Ok(records)
}

fn parse_row(row: &csv::StringRecord) -> Result<Record, String> {
    if row.len() != FIELDS_PER_ROW {
        return Err(format!(
            "expected {FIELDS_PER_ROW} fields, found {}",
            row.len()
        ));
    }

    let quantity: u64 = row[2]
        .parse()
        .map_err(|_| format!("quantity {:?} is not a non-negative integer", &row[2]))?;

    let expiration = &row[3];
    expiration
        .parse::<NaiveDate>()
        .map_err(|_| format!("expiration {expiration:?} is not a [yyyy-mm-dd] date"))?;

    Ok(Record::new(&row[0], &row[1], quantity, expiration))
}
