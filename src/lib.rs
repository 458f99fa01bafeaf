#![forbid(unsafe_code)]

//! pdf_census — census of user-generated PDF documents in a publishing
//! content tree.
//!
//! The pipeline walks the published subtree of a content repository, picks
//! out user-uploaded PDF artifacts, correlates each with its page's
//! `data.json` metadata, filters by a cutoff instant, and writes one CSV row
//! per surviving artifact with its constructed public URL.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use pdf_census::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use pdf_census::core::config::CensusConfig;
//! use pdf_census::scanner::run_census;
//! ```

pub mod prelude;

pub mod core;
pub mod scanner;
