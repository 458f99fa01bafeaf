//! Content tree walker: a pull-based iterator over candidate artifacts.
//!
//! The walker visits the published subtree depth-first, sorting directory
//! entries lexically at each level so two runs over an unchanged tree emit
//! candidates (and therefore report rows) in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::errors::{CensusError, Result};
use crate::core::paths::{has_path_segment, relative_uri};

/// Name of the published subtree under the content root.
pub const PUBLISHED_DIR: &str = "master";

/// Fixed name of the per-page metadata document.
pub const METADATA_FILE: &str = "data.json";

/// Artifact extension, matched case-sensitively.
const ARTIFACT_EXT: &str = "pdf";

/// Reserved name of the generic per-page rendering. Not a user upload.
const PAGE_RENDERING: &str = "page.pdf";

/// Path segment reserved for time-series data; artifacts under it are
/// generated, not user uploads.
const TIMESERIES_SEGMENT: &str = "timeseries";

/// One artifact file discovered during the walk.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Absolute (or root-relative) filesystem path of the artifact.
    pub path: PathBuf,
    /// Path relative to the published subtree, forward-slash separated.
    pub uri: String,
    /// Base name of the artifact file.
    pub filename: String,
    /// Filesystem modification time.
    pub modified: DateTime<Utc>,
}

impl Candidate {
    /// Location of the page's metadata document: a fixed-name sibling in
    /// the candidate's containing directory.
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.path
            .parent()
            .map_or_else(|| PathBuf::from(METADATA_FILE), |dir| dir.join(METADATA_FILE))
    }
}

/// Inclusion verdict for a path relative to the published subtree.
///
/// A candidate must carry the artifact extension (case-sensitive), must not
/// be the reserved per-page rendering, and must not sit under a reserved
/// time-series segment. The segment check is whole-component containment,
/// not substring matching.
#[must_use]
pub fn is_candidate(relative: &Path) -> bool {
    let has_artifact_ext = relative.extension().is_some_and(|ext| ext == ARTIFACT_EXT);
    let is_page_rendering = relative
        .file_name()
        .is_some_and(|name| name == PAGE_RENDERING);

    has_artifact_ext && !is_page_rendering && !has_path_segment(relative, TIMESERIES_SEGMENT)
}

/// Depth-first walker over the published subtree, yielding candidates.
///
/// Finite and not restartable: any error fuses the iterator, since the run
/// aborts on first failure anyway.
#[derive(Debug)]
pub struct CandidateWalker {
    base: PathBuf,
    stack: Vec<PathBuf>,
}

impl CandidateWalker {
    /// Open a walk over `<root>/master`. Fails if the subtree is missing.
    pub fn new(root: &Path) -> Result<Self> {
        let base = root.join(PUBLISHED_DIR);
        if !base.is_dir() {
            return Err(CensusError::RootNotFound { path: base });
        }
        Ok(Self {
            stack: vec![base.clone()],
            base,
        })
    }

    /// The published subtree this walker traverses.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn fail(&mut self, err: CensusError) -> Option<Result<Candidate>> {
        self.stack.clear();
        Some(Err(err))
    }

    /// Push a directory's children so they pop in lexical order.
    fn descend(&mut self, dir: &Path) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|source| CensusError::io(dir, source))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CensusError::io(dir, source))?;
            children.push(entry.path());
        }
        children.sort_unstable_by(|a, b| b.cmp(a));
        self.stack.extend(children);
        Ok(())
    }
}

impl Iterator for CandidateWalker {
    type Item = Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            // lstat: symlinks are neither followed nor reported.
            let meta = match fs::symlink_metadata(&path) {
                Ok(meta) => meta,
                Err(source) => return self.fail(CensusError::io(&path, source)),
            };

            if meta.is_dir() {
                if let Err(err) = self.descend(&path) {
                    return self.fail(err);
                }
                continue;
            }
            if !meta.is_file() {
                continue;
            }

            let relative = match path.strip_prefix(&self.base) {
                Ok(relative) => relative,
                Err(_) => {
                    return self.fail(CensusError::OutsideBase {
                        path: path.clone(),
                        base: self.base.clone(),
                    });
                }
            };
            if !is_candidate(relative) {
                continue;
            }

            let uri = match relative_uri(&self.base, &path) {
                Ok(uri) => uri,
                Err(err) => return self.fail(err),
            };
            let modified = match meta.modified() {
                Ok(modified) => DateTime::<Utc>::from(modified),
                Err(source) => return self.fail(CensusError::io(&path, source)),
            };
            let filename = relative
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            return Some(Ok(Candidate {
                path,
                uri,
                filename,
                modified,
            }));
        }
        None
    }
}
