//! Path helpers for URI construction and exclusion checks.

use std::path::{Component, Path, PathBuf};

use crate::core::errors::{CensusError, Result};

/// Render `path` relative to `base` as a forward-slash URI.
///
/// Separators are normalized to `/` regardless of host platform, since the
/// result is embedded in a public URL. Fails if `path` does not live under
/// `base`.
pub fn relative_uri(base: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(base)
        .map_err(|_| CensusError::OutsideBase {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })?;

    let mut uri = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            if !uri.is_empty() {
                uri.push('/');
            }
            uri.push_str(&part.to_string_lossy());
        }
    }
    Ok(uri)
}

/// True if any component of `path` equals `segment` exactly.
///
/// This is a whole-component containment check, not a substring match:
/// `economy/timeseries/a.pdf` contains the segment `timeseries`,
/// `economy/timeseries-archive/a.pdf` does not.
#[must_use]
pub fn has_path_segment(path: &Path, segment: &str) -> bool {
    path.components()
        .any(|component| matches!(component, Component::Normal(part) if part == segment))
}

/// Absolute form of `path`, resolved against the current directory when
/// relative. Used only for display in console output.
#[must_use]
pub fn display_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    }
}
