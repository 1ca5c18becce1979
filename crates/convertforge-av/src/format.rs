//! Target formats and the per-format encode plans.
//!
//! The encode plan is where codec quirks live: containers whose names differ
//! from the file extension, lossless flags, alpha flattening. Everything the
//! backends need to know about a target comes from [`EncodePlan::for_target`].

use std::fmt;

/// Image target formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageTarget {
    Png,
    Jpg,
    Jpeg,
    Ico,
    Bmp,
    Webp,
    Heic,
    Heif,
}

impl ImageTarget {
    pub const ALL: [ImageTarget; 8] = [
        ImageTarget::Png,
        ImageTarget::Jpg,
        ImageTarget::Jpeg,
        ImageTarget::Ico,
        ImageTarget::Bmp,
        ImageTarget::Webp,
        ImageTarget::Heic,
        ImageTarget::Heif,
    ];

    /// File extension written for this target.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Ico => "ico",
            Self::Bmp => "bmp",
            Self::Webp => "webp",
            Self::Heic => "heic",
            Self::Heif => "heif",
        }
    }

    /// Whether the format cannot store transparency.
    pub fn drops_alpha(&self) -> bool {
        matches!(self, Self::Jpg | Self::Jpeg | Self::Bmp)
    }

    /// Whether encoding needs the optional HEIF encoder.
    pub fn is_heif(&self) -> bool {
        matches!(self, Self::Heic | Self::Heif)
    }

    /// Encoder format for targets the image crate writes directly.
    pub fn image_format(&self) -> Option<image::ImageFormat> {
        match self {
            Self::Png => Some(image::ImageFormat::Png),
            Self::Jpg | Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Ico => Some(image::ImageFormat::Ico),
            Self::Bmp => Some(image::ImageFormat::Bmp),
            Self::Webp => Some(image::ImageFormat::WebP),
            Self::Heic | Self::Heif => None,
        }
    }
}

/// Audio target formats, also used for audio extraction from video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioTarget {
    Mp3,
    Wav,
    Aac,
    M4a,
    Ogg,
    Wma,
    Flac,
}

impl AudioTarget {
    pub const ALL: [AudioTarget; 7] = [
        AudioTarget::Mp3,
        AudioTarget::Wav,
        AudioTarget::Aac,
        AudioTarget::M4a,
        AudioTarget::Ogg,
        AudioTarget::Wma,
        AudioTarget::Flac,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Aac => "aac",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
            Self::Wma => "wma",
            Self::Flac => "flac",
        }
    }

    /// Container, codec and extra encoder parameters for ffmpeg.
    pub fn encoding(&self) -> AudioEncoding {
        match self {
            Self::Aac => AudioEncoding::new("adts", Some("aac")),
            Self::M4a => AudioEncoding::new("ipod", Some("aac")),
            Self::Wma => AudioEncoding::new("asf", Some("wmav2")),
            Self::Flac => AudioEncoding::new("flac", Some("flac"))
                .with_parameters(&["-compression_level", FLAC_MAX_COMPRESSION]),
            Self::Mp3 => AudioEncoding::new("mp3", None),
            Self::Wav => AudioEncoding::new("wav", None),
            Self::Ogg => AudioEncoding::new("ogg", None),
        }
    }
}

/// Highest compression level the FLAC encoder documents.
pub const FLAC_MAX_COMPRESSION: &str = "8";

/// Video target formats. Each one is handed to ffmpeg as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoTarget {
    Mp4,
    Avi,
    Mov,
    Mkv,
    Flv,
    Wmv,
    Webm,
    Mpeg,
    Mpg,
}

impl VideoTarget {
    pub const ALL: [VideoTarget; 9] = [
        VideoTarget::Mp4,
        VideoTarget::Avi,
        VideoTarget::Mov,
        VideoTarget::Mkv,
        VideoTarget::Flv,
        VideoTarget::Wmv,
        VideoTarget::Webm,
        VideoTarget::Mpeg,
        VideoTarget::Mpg,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Avi => "avi",
            Self::Mov => "mov",
            Self::Mkv => "mkv",
            Self::Flv => "flv",
            Self::Wmv => "wmv",
            Self::Webm => "webm",
            Self::Mpeg => "mpeg",
            Self::Mpg => "mpg",
        }
    }
}

/// A conversion target in one of the three domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    Image(ImageTarget),
    Audio(AudioTarget),
    Video(VideoTarget),
}

impl TargetFormat {
    /// File extension the backend writes (before any fallback).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Image(t) => t.extension(),
            Self::Audio(t) => t.extension(),
            Self::Video(t) => t.extension(),
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Image encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageEncoding {
    pub target: ImageTarget,
    /// Drop the alpha channel before encoding.
    pub flatten_alpha: bool,
    /// Encode without loss.
    pub lossless: bool,
    /// Scale down to fit the largest icon size.
    pub fit_icon: bool,
}

/// Largest edge an ICO entry can have.
pub const ICON_MAX_SIZE: u32 = 256;

/// ffmpeg output settings for an audio target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEncoding {
    /// Value for `-f`.
    pub container: &'static str,
    /// Value for `-c:a`; `None` lets ffmpeg choose the container default.
    pub codec: Option<&'static str>,
    /// Extra encoder arguments placed after the codec.
    pub parameters: Vec<&'static str>,
}

impl AudioEncoding {
    fn new(container: &'static str, codec: Option<&'static str>) -> Self {
        Self {
            container,
            codec,
            parameters: Vec::new(),
        }
    }

    fn with_parameters(mut self, parameters: &[&'static str]) -> Self {
        self.parameters.extend_from_slice(parameters);
        self
    }
}

/// Everything a backend needs to encode one file to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodePlan {
    /// Decode with the image codec library and re-encode.
    Image(ImageEncoding),
    /// Decode any supported container and write the audio stream only.
    Audio(AudioEncoding),
    /// Hand the whole file to ffmpeg, overwriting the output.
    Transcode,
}

impl EncodePlan {
    /// Build the plan for `target`.
    pub fn for_target(target: TargetFormat) -> Self {
        match target {
            TargetFormat::Image(t) => EncodePlan::Image(ImageEncoding {
                target: t,
                flatten_alpha: t.drops_alpha(),
                lossless: t == ImageTarget::Webp,
                fit_icon: t == ImageTarget::Ico,
            }),
            TargetFormat::Audio(t) => EncodePlan::Audio(t.encoding()),
            TargetFormat::Video(_) => EncodePlan::Transcode,
        }
    }
}
