//! Error types for convertforge-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a single file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool exited unsuccessfully. `stderr` is kept verbatim.
    #[error("{tool} failed: {}", stderr.trim_end())]
    ToolFailed { tool: String, stderr: String },

    /// The specified file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image codec library rejected the file.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Workspace error.
    #[error("workspace error: {0}")]
    Workspace(String),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Human-readable failure reason for reports.
    ///
    /// For a failed external tool this is its error stream, unmodified.
    pub fn reason(&self) -> String {
        match self {
            Self::ToolFailed { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }
}
