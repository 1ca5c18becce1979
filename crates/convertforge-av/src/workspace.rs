//! Scratch space for multi-step encodes.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding intermediate files for one conversion.
///
/// Everything inside is removed when the workspace is dropped.
///
/// # Example
///
/// ```no_run
/// use convertforge_av::Workspace;
///
/// let workspace = Workspace::new()?;
/// let intermediate = workspace.temp_file("frame.png");
/// // write `intermediate`, hand it to an external encoder...
/// # Ok::<(), convertforge_av::Error>(())
/// ```
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create a new, empty workspace.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().map_err(|e| Error::Workspace(e.to_string()))?;
        Ok(Self { temp_dir })
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a temp file path with the given name.
    pub fn temp_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
