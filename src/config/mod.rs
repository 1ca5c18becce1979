//! Configuration file loading.

mod types;

pub use types::*;

use anyhow::{Context, Result};
use convertforge_common::paths::has_illegal_chars;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content)?;
    expand_paths(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./convertforge.toml", "~/.config/convertforge/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

fn expand_paths(config: &mut Config) {
    for path in [
        config.output.directory.as_mut(),
        config.tools.ffmpeg.as_mut(),
        config.tools.heif_enc.as_mut(),
        Some(&mut config.logging.error_log),
    ]
    .into_iter()
    .flatten()
    {
        *path = expand(path);
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.limits.max_files == 0 {
        anyhow::bail!("limits.max_files must be at least 1");
    }

    if let Some(name) = &config.output.subfolder_name {
        let name = name.trim();
        if name == "." || name == ".." || has_illegal_chars(name) {
            anyhow::bail!("output.subfolder_name {:?} is not a valid folder name", name);
        }
    }

    if let Some(dir) = &config.output.directory {
        if !dir.exists() && !config.output.create_subfolder {
            tracing::warn!("Output directory does not exist: {:?}", dir);
        }
    }

    for (name, path) in [
        ("ffmpeg", &config.tools.ffmpeg),
        ("heif_enc", &config.tools.heif_enc),
    ] {
        if let Some(path) = path {
            if !path.exists() {
                tracing::warn!("Configured {} path does not exist: {:?}", name, path);
            }
        }
    }

    Ok(())
}
