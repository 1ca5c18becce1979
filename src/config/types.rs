use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::batch::{DEFAULT_ERROR_LOG, DEFAULT_MAX_FILES};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum files per batch (default: 20)
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory used when `-o` is not given
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Write into a subfolder of the output directory
    #[serde(default)]
    pub create_subfolder: bool,

    /// Subfolder name; blank means "Converted Images" and friends
    #[serde(default)]
    pub subfolder_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg: Option<PathBuf>,

    #[serde(default)]
    pub heif_enc: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Append failed video conversions to `error_log`
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_error_log() -> PathBuf {
    PathBuf::from(DEFAULT_ERROR_LOG)
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            error_log: default_error_log(),
        }
    }
}
