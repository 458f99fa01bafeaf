//! PDC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, CensusError>;

/// Top-level error type for the PDF census pipeline.
///
/// Every variant is fatal to the run: nothing is retried or recovered
/// locally, the traversal aborts and the error propagates to the caller.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("[PDC-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[PDC-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[PDC-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[PDC-1101] content root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("[PDC-2001] malformed page metadata in {path}: {details}")]
    MalformedMetadata { path: PathBuf, details: String },

    #[error("[PDC-2002] unparsable release date {value:?} for {path}: {details}")]
    BadReleaseDate {
        path: PathBuf,
        value: String,
        details: String,
    },

    #[error("[PDC-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[PDC-2201] report write failure at {path}: {details}")]
    ReportWrite { path: PathBuf, details: String },

    #[error("[PDC-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[PDC-3101] path {path} is not under content base {base}")]
    OutsideBase { path: PathBuf, base: PathBuf },
}

impl CensusError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "PDC-1001",
            Self::MissingConfig { .. } => "PDC-1002",
            Self::ConfigParse { .. } => "PDC-1003",
            Self::RootNotFound { .. } => "PDC-1101",
            Self::MalformedMetadata { .. } => "PDC-2001",
            Self::BadReleaseDate { .. } => "PDC-2002",
            Self::Serialization { .. } => "PDC-2101",
            Self::ReportWrite { .. } => "PDC-2201",
            Self::Io { .. } => "PDC-3002",
            Self::OutsideBase { .. } => "PDC-3101",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for report write failures.
    #[must_use]
    pub fn report_write(path: impl AsRef<Path>, details: impl std::fmt::Display) -> Self {
        Self::ReportWrite {
            path: path.as_ref().to_path_buf(),
            details: details.to_string(),
        }
    }
}

impl From<serde_json::Error> for CensusError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for CensusError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_errors() -> Vec<CensusError> {
        vec![
            CensusError::InvalidConfig {
                details: String::new(),
            },
            CensusError::MissingConfig {
                path: PathBuf::new(),
            },
            CensusError::ConfigParse {
                context: "",
                details: String::new(),
            },
            CensusError::RootNotFound {
                path: PathBuf::new(),
            },
            CensusError::MalformedMetadata {
                path: PathBuf::new(),
                details: String::new(),
            },
            CensusError::BadReleaseDate {
                path: PathBuf::new(),
                value: String::new(),
                details: String::new(),
            },
            CensusError::Serialization {
                context: "",
                details: String::new(),
            },
            CensusError::ReportWrite {
                path: PathBuf::new(),
                details: String::new(),
            },
            CensusError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("test"),
            },
            CensusError::OutsideBase {
                path: PathBuf::new(),
                base: PathBuf::new(),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let codes: Vec<&str> = all_errors().iter().map(CensusError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_pdc_prefix() {
        for err in &all_errors() {
            assert!(
                err.code().starts_with("PDC-"),
                "code {} must start with PDC-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = CensusError::InvalidConfig {
            details: "bad value".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("PDC-1001"),
            "display should contain error code: {msg}"
        );
        assert!(
            msg.contains("bad value"),
            "display should contain details: {msg}"
        );
    }

    #[test]
    fn io_convenience_constructor() {
        let err = CensusError::io(
            "/tmp/data.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "PDC-3002");
        assert!(err.to_string().contains("/tmp/data.json"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CensusError = json_err.into();
        assert_eq!(err.code(), "PDC-2101");
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: CensusError = toml_err.into();
        assert_eq!(err.code(), "PDC-1003");
    }
}
