//! Bulk loading of bids from the monthly sales CSV export

use crate::{
    Bid, ChainedHashTable,
    bid::parse_amount,
    config::ColumnLayout,
    error::{Error, Result},
};
use csv::{Reader, ReaderBuilder, StringRecord};
use log::{debug, error, info};
use std::{io::Read, path::Path};

/// Outcome of a load
///
/// A failed load keeps every bid inserted before the failing row.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Rows handed to the table, duplicates included
    pub rows_read: usize,
    /// Rows that created a new entry
    pub inserted: usize,
    /// The error that stopped the load early, if any
    pub error: Option<Error>,
}

impl LoadReport {
    /// Returns true if every row of the source was read
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Configures the CSV reader: first row is a header, rows may vary in width
fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Loads every bid of the CSV file at `path` into `table`.
///
/// Errors are logged and returned in the report, never propagated.
pub fn load_bids<P: AsRef<Path>>(
    path: P,
    columns: &ColumnLayout,
    table: &mut ChainedHashTable,
) -> LoadReport {
    let path = path.as_ref();
    info!("Loading bids from {}", path.display());

    match reader_builder().from_path(path) {
        Ok(reader) => load_records(reader, columns, table),
        Err(e) => {
            let e = Error::from(e);
            error!("Cannot open {}: {e}", path.display());
            LoadReport { error: Some(e), ..LoadReport::default() }
        }
    }
}

/// Loads every bid of CSV data read from `reader` into `table`
pub fn load_bids_from_reader<R: Read>(
    reader: R,
    columns: &ColumnLayout,
    table: &mut ChainedHashTable,
) -> LoadReport {
    load_records(reader_builder().from_reader(reader), columns, table)
}

/// Inserts rows until the source ends or a row fails
fn load_records<R: Read>(
    mut reader: Reader<R>,
    columns: &ColumnLayout,
    table: &mut ChainedHashTable,
) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, record) in reader.records().enumerate() {
        let row = index.saturating_add(1);
        let parsed = record.map_err(Error::from).and_then(|record| bid_from_record(&record, row, columns));

        let bid = match parsed {
            Ok(bid) => bid,
            Err(e) => {
                error!("Stopped loading at row {row}: {e}");
                report.error = Some(e);
                break;
            }
        };

        debug!("Row {row}: bid {}", bid.id);
        if table.insert(bid) {
            report.inserted = report.inserted.saturating_add(1);
        } else {
            debug!("Row {row}: duplicate id ignored");
        }
        report.rows_read = report.rows_read.saturating_add(1);
    }

    info!(
        "Read {} rows, {} new bids, table holds {}",
        report.rows_read,
        report.inserted,
        table.len()
    );
    report
}

/// Builds a bid from the columns of one row
fn bid_from_record(record: &StringRecord, row: usize, columns: &ColumnLayout) -> Result<Bid> {
    if let Some(column) = columns.first_missing_column(record.len()) {
        return Err(Error::MissingColumn { row, column });
    }

    let field = |column: usize| record.get(column).ok_or(Error::MissingColumn { row, column });

    Ok(Bid {
        id: field(columns.id)?.to_owned(),
        title: field(columns.title)?.to_owned(),
        fund: field(columns.fund)?.to_owned(),
        amount: parse_amount(field(columns.amount)?, columns.currency_symbol),
    })
}
