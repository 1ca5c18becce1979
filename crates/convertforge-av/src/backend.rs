//! The codec backend seam.
//!
//! The batch orchestrator only ever talks to [`CodecBackend`]. [`MediaBackend`]
//! is the production implementation; tests substitute their own.

use std::path::{Path, PathBuf};

use crate::actions;
use crate::format::{EncodePlan, TargetFormat};
use crate::tools::{get_tool_path, FFMPEG, HEIF_ENC};
use crate::{Error, Result};

/// One file to convert.
#[derive(Debug, Clone)]
pub struct ConversionJob<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub target: TargetFormat,
    pub plan: EncodePlan,
}

/// What a successful conversion actually wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedOutput {
    /// Path of the written file.
    pub path: PathBuf,
    /// Extension of the format written.
    pub format: &'static str,
    /// Whether a fallback format was written instead of the requested one.
    pub fell_back: bool,
}

impl ConvertedOutput {
    pub fn new(path: impl Into<PathBuf>, format: &'static str) -> Self {
        Self {
            path: path.into(),
            format,
            fell_back: false,
        }
    }

    pub fn fallback(path: impl Into<PathBuf>, format: &'static str) -> Self {
        Self {
            path: path.into(),
            format,
            fell_back: true,
        }
    }
}

/// Converts a single file. Implementations must not touch any other file.
pub trait CodecBackend {
    fn convert(&self, job: &ConversionJob<'_>) -> Result<ConvertedOutput>;
}

/// External tools available to the backend.
///
/// A missing tool is `None`; nothing here fails at detection time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// ffmpeg, required for audio and video targets.
    pub ffmpeg: Option<PathBuf>,
    /// heif-enc, optional encoder for HEIC/HEIF targets.
    pub heif_enc: Option<PathBuf>,
}

impl Capabilities {
    /// Resolve tools, preferring configured paths over `PATH` lookup.
    pub fn detect(ffmpeg: Option<&Path>, heif_enc: Option<&Path>) -> Self {
        let caps = Self {
            ffmpeg: get_tool_path(FFMPEG, ffmpeg).ok(),
            heif_enc: get_tool_path(HEIF_ENC, heif_enc).ok(),
        };

        #[cfg(feature = "tracing")]
        {
            match &caps.ffmpeg {
                Some(path) => tracing::debug!("Using ffmpeg at {:?}", path),
                None => tracing::warn!("ffmpeg not found; audio and video conversion unavailable"),
            }
            if caps.heif_enc.is_none() {
                tracing::info!("heif-enc not found; HEIC/HEIF targets will be written as PNG");
            }
        }

        caps
    }

    /// Whether HEIC/HEIF can be encoded natively.
    pub fn has_heif_encoder(&self) -> bool {
        self.heif_enc.is_some()
    }
}

/// Production backend: `image` for stills, ffmpeg for audio and video.
#[derive(Debug, Clone, Default)]
pub struct MediaBackend {
    capabilities: Capabilities,
}

impl MediaBackend {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn ffmpeg(&self) -> Result<&Path> {
        self.capabilities
            .ffmpeg
            .as_deref()
            .ok_or_else(|| Error::tool_not_found(FFMPEG))
    }
}

impl CodecBackend for MediaBackend {
    fn convert(&self, job: &ConversionJob<'_>) -> Result<ConvertedOutput> {
        match &job.plan {
            EncodePlan::Image(encoding) => actions::convert_image(
                job.input,
                job.output,
                encoding,
                self.capabilities.heif_enc.as_deref(),
            ),
            EncodePlan::Audio(encoding) => {
                actions::encode_audio(self.ffmpeg()?, job.input, job.output, encoding)?;
                Ok(ConvertedOutput::new(job.output, job.target.extension()))
            }
            EncodePlan::Transcode => {
                actions::transcode(self.ffmpeg()?, job.input, job.output)?;
                Ok(ConvertedOutput::new(job.output, job.target.extension()))
            }
        }
    }
}
