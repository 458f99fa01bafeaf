//! Census configuration: optional TOML file + env var overrides + defaults.
//!
//! The CLI constructs one [`CensusConfig`] per run and hands it to the
//! pipeline entry point; nothing inside the pipeline reads flags or globals.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{CensusError, Result};

/// Default public host used when constructing artifact URLs.
pub const DEFAULT_HOST: &str = "http://www.ons.gov.uk";

/// Default report file name, resolved relative to the content root.
pub const DEFAULT_OUTPUT: &str = "user-generated-pdfs.csv";

/// Default cutoff instant: artifacts dated strictly before it are dropped.
#[must_use]
pub fn default_cutoff() -> DateTime<Utc> {
    // 2018-09-01T00:00:00Z
    Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0)
        .single()
        .expect("static cutoff timestamp is unambiguous")
}

/// Full census configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CensusConfig {
    /// Content repository root; must contain the published subtree.
    pub root: PathBuf,
    /// Public host prefixed to every constructed artifact URL.
    pub host: String,
    /// Report file; a relative path is resolved against `root`.
    pub output: PathBuf,
    /// Rows whose effective date falls strictly before this instant are dropped.
    pub cutoff: DateTime<Utc>,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            host: DEFAULT_HOST.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            cutoff: default_cutoff(),
        }
    }
}

impl CensusConfig {
    /// Load config from an optional TOML file, then apply env overrides.
    ///
    /// With no path, defaults are used. An explicit path that does not exist
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(path).map_err(|source| CensusError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            Some(path) => {
                return Err(CensusError::MissingConfig {
                    path: path.to_path_buf(),
                });
            }
            None => Self::default(),
        };

        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(raw) = non_empty_env("PDFCENSUS_ROOT") {
            self.root = PathBuf::from(raw);
        }
        if let Some(raw) = non_empty_env("PDFCENSUS_HOST") {
            self.host = raw;
        }
        if let Some(raw) = non_empty_env("PDFCENSUS_OUTPUT") {
            self.output = PathBuf::from(raw);
        }
        if let Some(raw) = non_empty_env("PDFCENSUS_CUTOFF") {
            self.cutoff = parse_cutoff(&raw)?;
        }
        Ok(())
    }

    /// Check the config is runnable. Surfaced before any traversal begins.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(CensusError::InvalidConfig {
                details: "content root path is required".to_string(),
            });
        }
        if !self.root.is_dir() {
            return Err(CensusError::RootNotFound {
                path: self.root.clone(),
            });
        }
        if self.host.is_empty() {
            return Err(CensusError::InvalidConfig {
                details: "public host must not be empty".to_string(),
            });
        }
        if self.output.as_os_str().is_empty() {
            return Err(CensusError::InvalidConfig {
                details: "output file name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the report path: relative outputs land next to the content root.
    #[must_use]
    pub fn effective_output(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}

/// Parse a cutoff instant from an RFC 3339 string.
pub fn parse_cutoff(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| CensusError::InvalidConfig {
            details: format!("bad cutoff {raw:?}: {err}"),
        })
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}
