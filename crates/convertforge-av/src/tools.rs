//! External tool detection and management.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the external transcoder binary.
pub const FFMPEG: &str = "ffmpeg";

/// Name of the optional HEIF encoder binary (ships with libheif).
pub const HEIF_ENC: &str = "heif-enc";

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
    /// Whether conversions still work without it.
    pub optional: bool,
}

/// Check if a tool is available and get its information.
///
/// # Example
///
/// ```no_run
/// use convertforge_av::check_tool;
///
/// let info = check_tool("ffmpeg", "-version");
/// if info.available {
///     println!("ffmpeg version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str, version_arg: &str) -> ToolInfo {
    let result = Command::new(name).arg(version_arg).output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path: which::which(name).ok(),
                optional: false,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
            optional: false,
        },
    }
}

/// Check all tools used by the conversion backends.
///
/// Returns information about ffmpeg, ffprobe and heif-enc. `heif-enc` is
/// optional: without it HEIC/HEIF targets fall back to PNG.
pub fn check_tools() -> Vec<ToolInfo> {
    let heif = ToolInfo {
        optional: true,
        ..check_tool(HEIF_ENC, "--version")
    };
    vec![
        check_tool(FFMPEG, "-version"),
        check_tool("ffprobe", "-version"),
        heif,
    ]
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    require_tool(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tool_not_found() {
        let info = check_tool("nonexistent_tool_12345", "--version");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert!(info.path.is_none());
    }

    #[test]
    fn test_check_tools_marks_heif_optional() {
        let tools = check_tools();
        assert_eq!(tools.len(), 3);
        let heif = tools.iter().find(|t| t.name == HEIF_ENC).unwrap();
        assert!(heif.optional);
        assert!(tools.iter().filter(|t| t.name != HEIF_ENC).all(|t| !t.optional));
    }

    #[test]
    fn test_get_tool_path_prefers_existing_config_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = get_tool_path("nonexistent_tool_12345", Some(file.path())).unwrap();
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_get_tool_path_missing() {
        let err = get_tool_path(
            "nonexistent_tool_12345",
            Some(Path::new("/nonexistent/bin/tool")),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
