//! CSV report writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::core::errors::{CensusError, Result};
use crate::scanner::row::ReportRow;

/// Report column headers, in report order.
pub const HEADER: [&str; 9] = [
    "URL",
    "Filename",
    "Title",
    "Name",
    "Email",
    "Telephone",
    "Release Date",
    "Last Modified Date",
    "PDF Table",
];

/// Owns the output file handle for the duration of one run.
///
/// The target is created (truncating any prior file of the same name) and the
/// header written immediately. There is no atomic rename: a partially written
/// file from an aborted run must not be treated as valid output.
#[derive(Debug)]
pub struct ReportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    rows_written: u64,
}

impl ReportWriter {
    /// Create/truncate the report file and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let writer = csv::Writer::from_path(path)
            .map_err(|err| CensusError::report_write(path, err))?;
        let mut report = Self {
            writer,
            path: path.to_path_buf(),
            rows_written: 0,
        };
        report
            .writer
            .write_record(HEADER)
            .map_err(|err| CensusError::report_write(&report.path, err))?;
        Ok(report)
    }

    /// Append one accepted row. Quoting of embedded delimiters and quotes
    /// follows RFC 4180 via the csv crate.
    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.writer
            .write_record([
                row.url.as_str(),
                row.filename.as_str(),
                row.title.as_str(),
                row.name.as_str(),
                row.email.as_str(),
                row.telephone.as_str(),
                row.release_date_display.as_str(),
                row.last_modified_display.as_str(),
                if row.is_table_attachment { "true" } else { "false" },
            ])
            .map_err(|err| CensusError::report_write(&self.path, err))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far (header excluded).
    #[must_use]
    pub const fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and close the file, returning its path.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .map_err(|err| CensusError::report_write(&self.path, err))?;
        Ok(self.path)
    }
}
