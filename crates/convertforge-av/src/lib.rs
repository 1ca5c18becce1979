//! # convertforge-av
//!
//! Codec backends for convertforge.
//!
//! This crate provides functionality for:
//! - Describing conversion targets and their codec quirks ([`EncodePlan`])
//! - Re-encoding still images with the `image` crate
//! - Audio encoding, audio extraction and video transcoding through ffmpeg
//! - Detecting the external tools the backends rely on
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use convertforge_av::{
//!     AudioTarget, Capabilities, CodecBackend, ConversionJob, EncodePlan, MediaBackend,
//!     TargetFormat,
//! };
//! use std::path::Path;
//!
//! let backend = MediaBackend::new(Capabilities::detect(None, None));
//! let target = TargetFormat::Audio(AudioTarget::Flac);
//! let written = backend.convert(&ConversionJob {
//!     input: Path::new("/music/track.wav"),
//!     output: Path::new("/music/out/track.flac"),
//!     target,
//!     plan: EncodePlan::for_target(target),
//! })?;
//! println!("wrote {}", written.path.display());
//! # Ok::<(), convertforge_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod backend;
pub mod command;
pub mod format;
pub mod tools;
pub mod workspace;

// Re-exports
pub use backend::{Capabilities, CodecBackend, ConversionJob, ConvertedOutput, MediaBackend};
pub use command::{ToolCommand, ToolOutput};
pub use error::{Error, Result};
pub use format::{
    AudioEncoding, AudioTarget, EncodePlan, ImageEncoding, ImageTarget, TargetFormat, VideoTarget,
};
pub use tools::{check_tool, check_tools, require_tool, ToolInfo};
pub use workspace::Workspace;
