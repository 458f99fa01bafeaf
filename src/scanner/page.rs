//! Page metadata model and loader.
//!
//! Each page directory in the content tree may carry a `data.json` document
//! describing the page. Partial documents are the norm: every field is
//! individually optional and unknown keys are ignored. A page with no
//! `data.json` at all is equivalent to one with every field empty.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::core::errors::{CensusError, Result};

/// Parsed `data.json` for one page directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageMetadata {
    /// Declared canonical path of the page. Parsed but unused downstream.
    pub uri: String,
    /// Page description block, absent on structural pages.
    pub description: Option<Description>,
    /// Data-table PDF attachments declared by the page, when any.
    #[serde(rename = "pdfTable")]
    pub pdf_tables: Option<Vec<PdfTable>>,
}

/// Description block: title, release date and contact details.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Description {
    /// Ingestion-format timestamp string; empty means "unset".
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub title: String,
    pub contact: Option<Contact>,
}

/// Contact details, each field independently possibly empty.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub telephone: String,
}

/// One declared table attachment: display title plus exact file name.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PdfTable {
    pub title: String,
    pub file: String,
}

impl PageMetadata {
    /// True if `filename` is declared as a table attachment by this page.
    /// Exact, case-sensitive match with no path normalization.
    #[must_use]
    pub fn declares_table(&self, filename: &str) -> bool {
        self.pdf_tables
            .as_deref()
            .is_some_and(|tables| tables.iter().any(|table| table.file == filename))
    }
}

/// Load the metadata document at `path`.
///
/// A missing file is not an error: downstream treats it as all-empty
/// metadata. A file that exists but fails to parse is fatal — metadata
/// corruption must be visible, not silently skipped.
pub fn load_page_metadata(path: &Path) -> Result<Option<PageMetadata>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(CensusError::io(path, source)),
    };

    let page = serde_json::from_str(&raw).map_err(|err| CensusError::MalformedMetadata {
        path: path.to_path_buf(),
        details: err.to_string(),
    })?;
    Ok(Some(page))
}
