//! Core type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Conversion domain a batch belongs to.
///
/// Each domain has its own format tables, source filters and default output
/// folder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still images.
    Image,
    /// Audio files.
    Audio,
    /// Video files, including audio extraction from video.
    Video,
}

impl MediaKind {
    /// All media kinds, in menu order.
    pub const ALL: [MediaKind; 3] = [MediaKind::Image, MediaKind::Audio, MediaKind::Video];

    /// Folder name used when a subfolder is requested but left blank.
    pub fn default_folder_name(&self) -> &'static str {
        match self {
            Self::Image => "Converted Images",
            Self::Audio => "Converted Audio",
            Self::Video => "Converted Videos",
        }
    }

    /// Plural noun used in summaries ("images", "audio files", "video files").
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Audio => "audio files",
            Self::Video => "video files",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" | "images" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "video" | "videos" => Ok(Self::Video),
            other => Err(Error::invalid_input(format!("unknown media kind: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_display() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Audio.to_string(), "audio");
        assert_eq!(MediaKind::Video.to_string(), "video");
    }

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!("Image".parse::<MediaKind>().unwrap(), MediaKind::Image);
        assert_eq!(" audio ".parse::<MediaKind>().unwrap(), MediaKind::Audio);
        assert_eq!("videos".parse::<MediaKind>().unwrap(), MediaKind::Video);
        assert!("document".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_default_folder_names() {
        assert_eq!(MediaKind::Image.default_folder_name(), "Converted Images");
        assert_eq!(MediaKind::Audio.default_folder_name(), "Converted Audio");
        assert_eq!(MediaKind::Video.default_folder_name(), "Converted Videos");
    }

    #[test]
    fn test_media_kind_serde() {
        let json = serde_json::to_string(&MediaKind::Video).unwrap();
        assert_eq!(json, "\"video\"");
        let kind: MediaKind = serde_json::from_str("\"audio\"").unwrap();
        assert_eq!(kind, MediaKind::Audio);
    }
}
