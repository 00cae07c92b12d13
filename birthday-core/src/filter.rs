//! Contact filtering.
//!
//! Keeps only the rows of a contacts export whose birthday column is
//! non-blank. The header row is copied unchanged.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::contact::{birthday_index, field};
use crate::error::BirthdayResult;

/// Row counts from a filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub kept: usize,
    pub removed: usize,
}

impl FilterStats {
    /// Number of data rows processed
    pub fn total(&self) -> usize {
        self.kept + self.removed
    }
}

/// Filter the CSV at `source` into `dest`, overwriting it.
///
/// The source is read completely before `dest` is opened, so both may be the
/// same path.
pub fn filter_contacts(source: &Path, dest: &Path) -> BirthdayResult<FilterStats> {
    let (headers, rows, stats) = read_filtered(File::open(source)?)?;
    write_rows(File::create(dest)?, &headers, &rows)?;

    info!(
        "Filtered {}: kept {}, removed {}",
        source.display(),
        stats.kept,
        stats.removed
    );
    Ok(stats)
}

/// Filter CSV data from `reader` into `writer`.
pub fn filter_records<R: Read, W: Write>(reader: R, writer: W) -> BirthdayResult<FilterStats> {
    let (headers, rows, stats) = read_filtered(reader)?;
    write_rows(writer, &headers, &rows)?;
    Ok(stats)
}

fn read_filtered<R: Read>(
    reader: R,
) -> BirthdayResult<(csv::StringRecord, Vec<csv::StringRecord>, FilterStats)> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let birthday_idx = birthday_index(&headers)?;

    let mut rows = Vec::new();
    let mut stats = FilterStats::default();

    for (line, result) in reader.records().enumerate() {
        let record = result?;
        if field(&record, birthday_idx).trim().is_empty() {
            debug!("Removing row {}: no birthday", line + 1);
            stats.removed += 1;
        } else {
            rows.push(record);
            stats.kept += 1;
        }
    }

    Ok((headers, rows, stats))
}

fn write_rows<W: Write>(
    writer: W,
    headers: &csv::StringRecord,
    rows: &[csv::StringRecord],
) -> BirthdayResult<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
