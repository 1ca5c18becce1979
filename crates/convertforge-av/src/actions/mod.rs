//! Media conversion actions.
//!
//! - Image re-encoding with the `image` crate (plus optional HEIF encoder)
//! - Audio encoding and extraction via ffmpeg
//! - Whole-file video transcoding via ffmpeg

mod audio;
mod image;
mod transcode;

pub use self::audio::{audio_args, encode_audio};
pub use self::image::convert_image;
pub use self::transcode::transcode;
