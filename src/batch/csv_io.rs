//! CSV import/export of user location records.
//!
//! Columns: `id,name,latitude,longitude,address`. Empty cells are missing values.

use csv::{ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};
use thiserror::Error;

use super::record::UserLocation;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read all records; fails on the first malformed row
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<UserLocation>, BatchError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

pub fn write_csv<W: Write>(writer: W, records: &[UserLocation]) -> Result<(), BatchError> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
