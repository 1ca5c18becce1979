//! Display-label lookup tables, one per media kind.
//!
//! Labels are what a user picks from a menu ("JPG", "MPEG", "AUDIO (Extract
//! from Video)"); targets are what the backend encodes. Lookups accept either
//! the label or the bare extension, case-insensitively. [`validate_tables`]
//! runs at startup and rejects a table that misses or repeats a target.

use convertforge_av::{AudioTarget, ImageTarget, TargetFormat, VideoTarget};
use convertforge_common::paths::{extension_lowercase, is_audio_file, is_image_file, is_video_file};
use convertforge_common::MediaKind;
use std::path::Path;

/// A selectable target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetEntry {
    pub label: &'static str,
    pub target: TargetFormat,
}

/// A selectable source format and the extensions it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFilter {
    pub label: &'static str,
    pub extensions: &'static [&'static str],
}

impl SourceFilter {
    /// Whether `path` has one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        extension_lowercase(path)
            .map(|ext| self.extensions.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

/// Label of the video-domain source that extracts audio.
pub const AUDIO_EXTRACTION_LABEL: &str = "AUDIO (Extract from Video)";

const fn image(label: &'static str, target: ImageTarget) -> TargetEntry {
    TargetEntry {
        label,
        target: TargetFormat::Image(target),
    }
}

const fn audio(label: &'static str, target: AudioTarget) -> TargetEntry {
    TargetEntry {
        label,
        target: TargetFormat::Audio(target),
    }
}

const fn video(label: &'static str, target: VideoTarget) -> TargetEntry {
    TargetEntry {
        label,
        target: TargetFormat::Video(target),
    }
}

const IMAGE_TARGETS: &[TargetEntry] = &[
    image("PNG", ImageTarget::Png),
    image("JPG", ImageTarget::Jpg),
    image("JPEG", ImageTarget::Jpeg),
    image("ICO", ImageTarget::Ico),
    image("BMP", ImageTarget::Bmp),
    image("WEBP", ImageTarget::Webp),
    image("HEIC", ImageTarget::Heic),
    image("HEIF", ImageTarget::Heif),
];

const AUDIO_TARGETS: &[TargetEntry] = &[
    audio("MP3", AudioTarget::Mp3),
    audio("WAV", AudioTarget::Wav),
    audio("AAC", AudioTarget::Aac),
    audio("M4A", AudioTarget::M4a),
    audio("OGG", AudioTarget::Ogg),
    audio("WMA", AudioTarget::Wma),
    audio("FLAC", AudioTarget::Flac),
];

// Video converts to video containers, or extracts audio to any audio target.
const VIDEO_TARGETS: &[TargetEntry] = &[
    video("MP4", VideoTarget::Mp4),
    video("AVI", VideoTarget::Avi),
    video("MOV", VideoTarget::Mov),
    video("MKV", VideoTarget::Mkv),
    video("FLV", VideoTarget::Flv),
    video("WMV", VideoTarget::Wmv),
    video("WEBM", VideoTarget::Webm),
    video("MPEG", VideoTarget::Mpeg),
    video("MPG", VideoTarget::Mpg),
    audio("MP3", AudioTarget::Mp3),
    audio("WAV", AudioTarget::Wav),
    audio("AAC", AudioTarget::Aac),
    audio("M4A", AudioTarget::M4a),
    audio("OGG", AudioTarget::Ogg),
    audio("WMA", AudioTarget::Wma),
    audio("FLAC", AudioTarget::Flac),
];

const fn source(label: &'static str, extensions: &'static [&'static str]) -> SourceFilter {
    SourceFilter { label, extensions }
}

const IMAGE_SOURCES: &[SourceFilter] = &[
    source("PNG", &["png"]),
    source("JPG", &["jpg", "jpeg"]),
    source("JPEG", &["jpg", "jpeg"]),
    source("ICO", &["ico"]),
    source("BMP", &["bmp"]),
    source("WEBP", &["webp"]),
    source("HEIC", &["heic"]),
    source("HEIF", &["heif"]),
];

const AUDIO_SOURCES: &[SourceFilter] = &[
    source("MP3", &["mp3"]),
    source("WAV", &["wav"]),
    source("AAC", &["aac"]),
    source("M4A", &["m4a"]),
    source("OGG", &["ogg"]),
    source("WMA", &["wma"]),
    source("FLAC", &["flac"]),
];

const VIDEO_SOURCES: &[SourceFilter] = &[
    source("MP4", &["mp4"]),
    source("AVI", &["avi"]),
    source("MOV", &["mov"]),
    source("MKV", &["mkv"]),
    source("FLV", &["flv"]),
    source("WMV", &["wmv"]),
    source("WEBM", &["webm"]),
    source("MPEG", &["mpeg"]),
    source("MPG", &["mpg"]),
    source(
        AUDIO_EXTRACTION_LABEL,
        &["mp3", "wav", "aac", "m4a", "ogg", "wma", "flac", "mpeg", "mpg"],
    ),
];

/// Target formats offered for `kind`, in menu order.
pub fn targets(kind: MediaKind) -> &'static [TargetEntry] {
    match kind {
        MediaKind::Image => IMAGE_TARGETS,
        MediaKind::Audio => AUDIO_TARGETS,
        MediaKind::Video => VIDEO_TARGETS,
    }
}

/// Source formats offered for `kind`, in menu order.
pub fn sources(kind: MediaKind) -> &'static [SourceFilter] {
    match kind {
        MediaKind::Image => IMAGE_SOURCES,
        MediaKind::Audio => AUDIO_SOURCES,
        MediaKind::Video => VIDEO_SOURCES,
    }
}

/// Find the target for a label or extension (case-insensitive).
pub fn lookup_target(kind: MediaKind, label: &str) -> Option<TargetFormat> {
    let wanted = label.trim();
    targets(kind)
        .iter()
        .find(|entry| {
            entry.label.eq_ignore_ascii_case(wanted)
                || entry.target.extension().eq_ignore_ascii_case(wanted)
        })
        .map(|entry| entry.target)
}

/// Find the source filter for a label (case-insensitive).
pub fn lookup_source(kind: MediaKind, label: &str) -> Option<&'static SourceFilter> {
    let wanted = label.trim();
    sources(kind)
        .iter()
        .find(|filter| filter.label.eq_ignore_ascii_case(wanted))
}

/// Whether `path` is something the `kind` domain can take as input.
///
/// Used when no source label narrows the selection. The video domain also
/// takes audio files, which it can only extract from.
pub fn accepts_kind(kind: MediaKind, path: &Path) -> bool {
    match kind {
        MediaKind::Image => is_image_file(path),
        MediaKind::Audio => is_audio_file(path),
        MediaKind::Video => is_video_file(path) || is_audio_file(path),
    }
}

/// Extension for a display label.
///
/// Last-resort rule: a label missing from the table is lower-cased and used
/// as the extension. Nothing in the batch path calls this; it exists for
/// callers that must name a file for a label they did not get from a table.
pub fn extension_for_label(kind: MediaKind, label: &str) -> String {
    lookup_target(kind, label)
        .map(|target| target.extension().to_string())
        .unwrap_or_else(|| label.trim().to_lowercase())
}

/// A format table that fails startup validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatTableError {
    #[error("{kind} format table lists '{label}' more than once")]
    DuplicateLabel { kind: MediaKind, label: &'static str },

    #[error("{kind} format table is missing target '{target}'")]
    MissingTarget { kind: MediaKind, target: TargetFormat },

    #[error("{kind} format table maps '{label}' to the same target as another label")]
    DuplicateTarget { kind: MediaKind, label: &'static str },

    #[error("{kind} source filter '{label}' accepts no extensions")]
    EmptySourceFilter { kind: MediaKind, label: &'static str },
}

/// Every target a kind's table must list exactly once.
fn expected_targets(kind: MediaKind) -> Vec<TargetFormat> {
    let audio = AudioTarget::ALL.into_iter().map(TargetFormat::Audio);
    match kind {
        MediaKind::Image => ImageTarget::ALL.into_iter().map(TargetFormat::Image).collect(),
        MediaKind::Audio => audio.collect(),
        MediaKind::Video => VideoTarget::ALL
            .into_iter()
            .map(TargetFormat::Video)
            .chain(audio)
            .collect(),
    }
}

/// Check that every kind's tables cover every enumerated target exactly once.
pub fn validate_tables() -> Result<(), FormatTableError> {
    for kind in MediaKind::ALL {
        let table = targets(kind);

        for (i, entry) in table.iter().enumerate() {
            let rest = &table[i + 1..];
            if rest.iter().any(|e| e.label.eq_ignore_ascii_case(entry.label)) {
                return Err(FormatTableError::DuplicateLabel {
                    kind,
                    label: entry.label,
                });
            }
            if rest.iter().any(|e| e.target == entry.target) {
                return Err(FormatTableError::DuplicateTarget {
                    kind,
                    label: entry.label,
                });
            }
        }

        for target in expected_targets(kind) {
            if !table.iter().any(|e| e.target == target) {
                return Err(FormatTableError::MissingTarget { kind, target });
            }
        }

        let filters = sources(kind);
        for (i, filter) in filters.iter().enumerate() {
            if filter.extensions.is_empty() {
                return Err(FormatTableError::EmptySourceFilter {
                    kind,
                    label: filter.label,
                });
            }
            if filters[i + 1..]
                .iter()
                .any(|f| f.label.eq_ignore_ascii_case(filter.label))
            {
                return Err(FormatTableError::DuplicateLabel {
                    kind,
                    label: filter.label,
                });
            }
        }
    }

    tracing::debug!("Format tables validated");
    Ok(())
}
