//! Where converted files go.

use std::path::PathBuf;

use convertforge_common::paths::has_illegal_chars;
use convertforge_common::MediaKind;

use super::error::{BatchError, Result};

/// Output location chosen for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPolicy {
    /// Base directory. `None` until the user picks one.
    pub base: Option<PathBuf>,
    /// Subfolder under the base. A blank name means the kind's default.
    pub subfolder: Option<String>,
}

impl OutputPolicy {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
            subfolder: None,
        }
    }

    pub fn with_subfolder(mut self, name: impl Into<String>) -> Self {
        self.subfolder = Some(name.into());
        self
    }

    /// Subfolder name after applying the kind's default to a blank name.
    pub fn subfolder_name(&self, kind: MediaKind) -> Option<String> {
        self.subfolder.as_deref().map(|name| {
            let name = name.trim();
            if name.is_empty() {
                kind.default_folder_name().to_string()
            } else {
                name.to_string()
            }
        })
    }
}

fn validate_folder_name(name: &str) -> Result<()> {
    if name == "." || name == ".." || has_illegal_chars(name) {
        return Err(BatchError::InvalidFolderName(name.to_string()));
    }
    Ok(())
}

/// Turn `policy` into a directory that exists.
///
/// With a subfolder, the directory is created (recursively) if needed.
/// Without one, the base itself must already exist; it is never created.
pub fn resolve_output_directory(policy: &OutputPolicy, kind: MediaKind) -> Result<PathBuf> {
    let base = policy.base.as_ref().ok_or(BatchError::NoOutputDirectory)?;

    let Some(name) = policy.subfolder_name(kind) else {
        if !base.is_dir() {
            return Err(BatchError::OutputDirectoryMissing(base.clone()));
        }
        return Ok(base.clone());
    };

    validate_folder_name(&name)?;
    let dir = base.join(&name);
    std::fs::create_dir_all(&dir).map_err(|source| BatchError::DirectoryCreation {
        path: dir.clone(),
        source,
    })?;
    tracing::debug!("Output directory ready: {:?}", dir);
    Ok(dir)
}
