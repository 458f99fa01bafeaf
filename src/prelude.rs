//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use pdf_census::prelude::*;
//! ```

// Core
pub use crate::core::config::{CensusConfig, default_cutoff, parse_cutoff};
pub use crate::core::errors::{CensusError, Result};

// Scanner
pub use crate::scanner::filter::CutoffFilter;
pub use crate::scanner::page::{PageMetadata, load_page_metadata};
pub use crate::scanner::report::ReportWriter;
pub use crate::scanner::row::{ReportRow, build_row};
pub use crate::scanner::walker::{Candidate, CandidateWalker, is_candidate};
pub use crate::scanner::{CensusSummary, run_census};
