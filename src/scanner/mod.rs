//! The census pipeline: walker → metadata loader → row builder → cutoff
//! filter → report writer.

pub mod filter;
pub mod page;
pub mod report;
pub mod row;
pub mod walker;

use crate::core::config::CensusConfig;
use crate::core::errors::Result;
use crate::scanner::filter::CutoffFilter;
use crate::scanner::page::load_page_metadata;
use crate::scanner::report::ReportWriter;
use crate::scanner::row::build_row;
use crate::scanner::walker::CandidateWalker;

use std::path::PathBuf;

/// Outcome of one successful census run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusSummary {
    /// Artifact files that passed the candidate test.
    pub candidates_seen: u64,
    /// Rows written to the report.
    pub rows_written: u64,
    /// Candidates dropped by the cutoff filter.
    pub dropped_before_cutoff: u64,
    /// Final report location.
    pub output: PathBuf,
}

/// Run the full pipeline against `config`.
///
/// Single-threaded and synchronous; candidates are pulled one at a time and
/// no row outlives its iteration. The first error from any stage aborts the
/// whole run — there is no partial-success mode, and a report left behind by
/// a failed run is not valid output.
pub fn run_census(config: &CensusConfig) -> Result<CensusSummary> {
    config.validate()?;

    let walker = CandidateWalker::new(&config.root)?;
    let mut writer = ReportWriter::create(&config.effective_output())?;
    let cutoff = CutoffFilter::new(config.cutoff);

    let mut candidates_seen = 0u64;
    let mut dropped_before_cutoff = 0u64;

    for candidate in walker {
        let candidate = candidate?;
        candidates_seen += 1;

        let page = load_page_metadata(&candidate.metadata_path())?;
        let row = build_row(&candidate, page.as_ref(), &config.host)?;

        if cutoff.keeps(&row) {
            writer.write_row(&row)?;
        } else {
            dropped_before_cutoff += 1;
        }
    }

    let rows_written = writer.rows_written();
    let output = writer.finish()?;

    Ok(CensusSummary {
        candidates_seen,
        rows_written,
        dropped_before_cutoff,
        output,
    })
}
