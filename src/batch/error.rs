//! Batch-level errors. Any of these stops a batch before the first file.

use std::path::PathBuf;

use convertforge_common::MediaKind;

/// Result type alias for batch operations.
pub type Result<T> = std::result::Result<T, BatchError>;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("no {0} selected")]
    EmptyFileSet(&'static str),

    #[error("no output folder selected")]
    NoOutputDirectory,

    #[error("no target format selected")]
    NoTargetFormat,

    #[error("unknown {kind} target format: {label}")]
    UnknownTargetFormat { kind: MediaKind, label: String },

    #[error("invalid folder name: {0:?}")]
    InvalidFolderName(String),

    #[error("output directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    #[error("failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BatchError {
    /// Empty-selection error phrased for `kind` ("no images selected").
    pub fn empty(kind: MediaKind) -> Self {
        Self::EmptyFileSet(kind.noun())
    }
}
