//! Cutoff filter: keep/drop decision against a fixed instant.

use chrono::{DateTime, Utc};

use crate::scanner::row::ReportRow;

/// Inclusion policy for report rows.
///
/// A row is kept iff its effective date is on or after the cutoff instant.
/// The effective date is the declared release date when one parsed, the file
/// modification time otherwise — exactly one of the two is ever consulted.
#[derive(Debug, Clone, Copy)]
pub struct CutoffFilter {
    cutoff: DateTime<Utc>,
}

impl CutoffFilter {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(cutoff: DateTime<Utc>) -> Self {
        Self { cutoff }
    }

    /// True if the row belongs in the report. Equality with the cutoff keeps
    /// the row; only strictly-before is dropped.
    #[must_use]
    pub fn keeps(&self, row: &ReportRow) -> bool {
        row.effective_date() >= self.cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn row(release: Option<DateTime<Utc>>, modified: DateTime<Utc>) -> ReportRow {
        ReportRow {
            url: String::new(),
            filename: "report.pdf".to_string(),
            title: String::new(),
            name: String::new(),
            email: String::new(),
            telephone: String::new(),
            release_date: release,
            release_date_display: String::new(),
            last_modified: modified,
            last_modified_display: String::new(),
            is_table_attachment: false,
        }
    }

    fn cutoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn equality_with_cutoff_is_kept() {
        let filter = CutoffFilter::new(cutoff());
        assert!(filter.keeps(&row(None, cutoff())));
        assert!(filter.keeps(&row(Some(cutoff()), cutoff() - Duration::days(365))));
    }

    #[test]
    fn one_millisecond_before_is_dropped() {
        let filter = CutoffFilter::new(cutoff());
        let just_before = cutoff() - Duration::milliseconds(1);
        assert!(!filter.keeps(&row(None, just_before)));
        assert!(!filter.keeps(&row(Some(just_before), cutoff())));
    }

    #[test]
    fn release_date_is_used_exclusively_when_present() {
        let filter = CutoffFilter::new(cutoff());
        let before = cutoff() - Duration::days(30);
        let after = cutoff() + Duration::days(30);

        // Old release date drops the row even with a recent mtime.
        assert!(!filter.keeps(&row(Some(before), after)));
        // Recent release date keeps the row even with an old mtime.
        assert!(filter.keeps(&row(Some(after), before)));
    }

    #[test]
    fn modification_time_is_the_fallback() {
        let filter = CutoffFilter::new(cutoff());
        let before = cutoff() - Duration::days(30);
        let after = cutoff() + Duration::days(30);

        assert!(filter.keeps(&row(None, after)));
        assert!(!filter.keeps(&row(None, before)));
    }
}
