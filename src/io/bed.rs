use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::data_structs::record::RawBedRecord;
use crate::data_structs::record_set::RecordSet;

/// Reads tab-separated, headerless BED-like rows into raw records.
///
/// Tokenization only; no field validation happens here. A row with the
/// wrong column count surfaces as a csv error.
pub fn read_bed_records<R: Read>(reader: R) -> anyhow::Result<Vec<RawBedRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: RawBedRecord = result.context("failed to read BED row")?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads and validates a whole BED-like table.
///
/// Validation is all-or-nothing: the first invalid field aborts the load
/// and the [`ValidationError`](crate::error::ValidationError) is preserved
/// in the returned error chain.
pub fn read_bed<R: Read>(reader: R) -> anyhow::Result<RecordSet> {
    let rows = read_bed_records(reader)?;
    info!("read {} raw rows", rows.len());
    let records = RecordSet::validate_table(&rows)?;
    Ok(records)
}

/// Opens a file path and reads it with [`read_bed`].
pub fn open_bed<P: AsRef<Path>>(path: P) -> anyhow::Result<RecordSet> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("failed to open {}", path.as_ref().display()))?;
    read_bed(file)
}
