//! Report row construction: merging filesystem facts with page metadata.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::core::errors::{CensusError, Result};
use crate::scanner::page::PageMetadata;
use crate::scanner::walker::Candidate;

/// Timestamp format used by the ingestion system for `releaseDate` strings,
/// e.g. `2019-01-01T00:00:00.000Z`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One accepted artifact, flattened for the report.
///
/// Built fresh per candidate and immutable once handed to the filter and
/// writer; no row outlives a single traversal iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Public download URL for the artifact.
    pub url: String,
    /// Base name of the artifact file.
    pub filename: String,
    /// Page title; empty when metadata is absent.
    pub title: String,
    /// Contact name; empty when metadata is absent.
    pub name: String,
    /// Contact email; empty when metadata is absent.
    pub email: String,
    /// Contact telephone; empty when metadata is absent.
    pub telephone: String,
    /// Parsed release date, present only when the page declared one.
    pub release_date: Option<DateTime<Utc>>,
    /// Human-readable release date; empty when unset.
    pub release_date_display: String,
    /// Filesystem modification time of the artifact; always present.
    pub last_modified: DateTime<Utc>,
    /// Human-readable modification time.
    pub last_modified_display: String,
    /// True if the page lists the artifact as a data-table attachment.
    pub is_table_attachment: bool,
}

impl ReportRow {
    /// The date the cutoff filter judges this row by: the declared release
    /// date when present, the file modification time otherwise. Never both.
    #[must_use]
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.release_date.unwrap_or(self.last_modified)
    }
}

/// Merge a candidate's filesystem facts with its page metadata.
///
/// Metadata fields default to empty strings and are populated only when the
/// field chain (description → contact → leaf) is non-null all the way down.
/// A declared non-empty release date that fails to parse aborts the run.
pub fn build_row(
    candidate: &Candidate,
    page: Option<&PageMetadata>,
    host: &str,
) -> Result<ReportRow> {
    let mut row = ReportRow {
        url: format!("{host}/file?uri={}", candidate.uri),
        filename: candidate.filename.clone(),
        title: String::new(),
        name: String::new(),
        email: String::new(),
        telephone: String::new(),
        release_date: None,
        release_date_display: String::new(),
        last_modified: candidate.modified,
        last_modified_display: rfc1123(candidate.modified),
        is_table_attachment: false,
    };

    let Some(page) = page else {
        return Ok(row);
    };

    if let Some(description) = &page.description {
        row.title = description.title.clone();

        if !description.release_date.is_empty() {
            let parsed = parse_release_date(candidate, &description.release_date)?;
            row.release_date_display = rfc1123(parsed);
            row.release_date = Some(parsed);
        }

        if let Some(contact) = &description.contact {
            row.name = contact.name.clone();
            row.email = contact.email.clone();
            row.telephone = contact.telephone.clone();
        }
    }

    row.is_table_attachment = page.declares_table(&candidate.filename);

    Ok(row)
}

fn parse_release_date(candidate: &Candidate, raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, RELEASE_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|err| CensusError::BadReleaseDate {
            path: candidate.path.clone(),
            value: raw.to_string(),
            details: err.to_string(),
        })
}

/// RFC 1123 rendering used for the report's date columns.
#[must_use]
pub fn rfc1123(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::page::{Contact, Description, PdfTable};
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn candidate() -> Candidate {
        Candidate {
            path: PathBuf::from("/content/master/economy/report.pdf"),
            uri: "economy/report.pdf".to_string(),
            filename: "report.pdf".to_string(),
            modified: Utc.with_ymd_and_hms(2020, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    fn full_page() -> PageMetadata {
        PageMetadata {
            uri: "/economy/report".to_string(),
            description: Some(Description {
                release_date: "2019-01-01T00:00:00.000Z".to_string(),
                title: "Report".to_string(),
                contact: Some(Contact {
                    name: "A".to_string(),
                    email: "a@x.com".to_string(),
                    telephone: "123".to_string(),
                }),
            }),
            pdf_tables: None,
        }
    }

    #[test]
    fn absent_metadata_yields_empty_fields() {
        let row = build_row(&candidate(), None, "http://example.com").unwrap();
        assert_eq!(row.url, "http://example.com/file?uri=economy/report.pdf");
        assert_eq!(row.filename, "report.pdf");
        assert_eq!(row.title, "");
        assert_eq!(row.name, "");
        assert_eq!(row.email, "");
        assert_eq!(row.telephone, "");
        assert!(row.release_date.is_none());
        assert_eq!(row.release_date_display, "");
        assert!(!row.is_table_attachment);
    }

    #[test]
    fn full_metadata_populates_all_fields() {
        let row = build_row(&candidate(), Some(&full_page()), "http://example.com").unwrap();
        assert_eq!(row.title, "Report");
        assert_eq!(row.name, "A");
        assert_eq!(row.email, "a@x.com");
        assert_eq!(row.telephone, "123");
        let release = row.release_date.unwrap();
        assert_eq!(release, Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(row.release_date_display, "Tue, 01 Jan 2019 00:00:00 GMT");
    }

    #[test]
    fn null_contact_leaves_contact_fields_empty() {
        let mut page = full_page();
        page.description.as_mut().unwrap().contact = None;
        let row = build_row(&candidate(), Some(&page), "http://example.com").unwrap();
        assert_eq!(row.title, "Report");
        assert_eq!(row.name, "");
        assert_eq!(row.email, "");
        assert_eq!(row.telephone, "");
    }

    #[test]
    fn empty_release_date_stays_unset() {
        let mut page = full_page();
        page.description.as_mut().unwrap().release_date = String::new();
        let row = build_row(&candidate(), Some(&page), "http://example.com").unwrap();
        assert!(row.release_date.is_none());
        assert_eq!(row.release_date_display, "");
        // Effective date falls back to the modification time.
        assert_eq!(row.effective_date(), row.last_modified);
    }

    #[test]
    fn bad_release_date_is_fatal() {
        let mut page = full_page();
        page.description.as_mut().unwrap().release_date = "01/01/2019".to_string();
        let err = build_row(&candidate(), Some(&page), "http://example.com").unwrap_err();
        assert_eq!(err.code(), "PDC-2002");
        assert!(err.to_string().contains("01/01/2019"));
    }

    #[test]
    fn release_date_takes_precedence_as_effective_date() {
        let row = build_row(&candidate(), Some(&full_page()), "http://example.com").unwrap();
        assert_eq!(row.effective_date(), row.release_date.unwrap());
        assert_ne!(row.effective_date(), row.last_modified);
    }

    #[test]
    fn table_attachment_flag_matches_declared_file() {
        let mut page = full_page();
        page.pdf_tables = Some(vec![PdfTable {
            title: "Table 1".to_string(),
            file: "report.pdf".to_string(),
        }]);
        let row = build_row(&candidate(), Some(&page), "http://example.com").unwrap();
        assert!(row.is_table_attachment);

        page.pdf_tables = Some(vec![PdfTable {
            title: "Table 1".to_string(),
            file: "other.pdf".to_string(),
        }]);
        let row = build_row(&candidate(), Some(&page), "http://example.com").unwrap();
        assert!(!row.is_table_attachment);
    }

    #[test]
    fn rfc1123_renders_gmt() {
        let instant = Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(rfc1123(instant), "Sat, 01 Sep 2018 00:00:00 GMT");
    }
}
