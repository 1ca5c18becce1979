//! The ordered, de-duplicated, capped set of files queued for conversion.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Files accepted per batch unless configured otherwise.
pub const DEFAULT_MAX_FILES: usize = 20;

/// Files queued for conversion.
///
/// Paths keep insertion order, appear at most once and never exceed the
/// cap. Operations return a new set instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFileSet {
    paths: Vec<PathBuf>,
    cap: usize,
}

impl Default for InputFileSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILES)
    }
}

impl InputFileSet {
    /// Empty set holding at most `cap` files.
    pub fn new(cap: usize) -> Self {
        Self {
            paths: Vec::new(),
            cap,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}

/// Outcome of [`add_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedFiles {
    pub files: InputFileSet,
    /// Whether paths were dropped to honor the cap.
    pub truncated: bool,
}

/// Append `candidates` to `existing`, skipping duplicates, then cut to `cap`.
///
/// Existing paths keep their position. New paths follow in the order given.
pub fn add_files<I, P>(existing: &InputFileSet, candidates: I, cap: usize) -> AddedFiles
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut paths = Vec::with_capacity(existing.len());

    let merged = existing
        .paths
        .iter()
        .cloned()
        .chain(candidates.into_iter().map(Into::into));
    for path in merged {
        if seen.insert(path.clone()) {
            paths.push(path);
        }
    }

    let truncated = paths.len() > cap;
    if truncated {
        tracing::warn!(
            "Maximum {} files allowed; dropping {} file(s)",
            cap,
            paths.len() - cap
        );
        paths.truncate(cap);
    }

    AddedFiles {
        files: InputFileSet { paths, cap },
        truncated,
    }
}

/// Remove `path` from `existing`. Removing an absent path is a no-op.
pub fn remove_file(existing: &InputFileSet, path: &Path) -> InputFileSet {
    InputFileSet {
        paths: existing
            .paths
            .iter()
            .filter(|p| p.as_path() != path)
            .cloned()
            .collect(),
        cap: existing.cap,
    }
}
