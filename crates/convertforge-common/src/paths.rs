//! Path utilities for classifying files by extension and building safe
//! output file names.
//!
//! Classification is extension-only. Content sniffing is deliberately absent:
//! a `.png` that holds JPEG bytes is still an image file here, and a decoder
//! further down the line decides whether it can actually be read.

use std::path::Path;

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "ico", "bmp", "webp", "heic", "heif"];

/// List of supported audio file extensions.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "m4a", "ogg", "wma", "flac"];

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "mkv", "flv", "wmv", "webm", "mpeg", "mpg",
];

/// Characters that are illegal in file names on at least one supported platform.
pub const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Lower-cased extension of `path`, without the leading dot.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use convertforge_common::paths::extension_lowercase;
///
/// assert_eq!(extension_lowercase(Path::new("Photo.JPG")).as_deref(), Some("jpg"));
/// assert_eq!(extension_lowercase(Path::new("README")), None);
/// ```
pub fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check whether `path` has one of the given extensions (case-insensitive).
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    extension_lowercase(path)
        .map(|ext| extensions.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has an image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use convertforge_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("poster.png")));
/// assert!(is_image_file(Path::new("/path/to/shot.HEIC")));
/// assert!(!is_image_file(Path::new("movie.mkv")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

/// Check if a path has an audio file extension.
pub fn is_audio_file(path: &Path) -> bool {
    has_extension(path, AUDIO_EXTENSIONS)
}

/// Check if a path has a video file extension.
pub fn is_video_file(path: &Path) -> bool {
    has_extension(path, VIDEO_EXTENSIONS)
}

/// Get the list of image file extensions.
#[must_use]
pub fn image_extensions() -> &'static [&'static str] {
    IMAGE_EXTENSIONS
}

/// Get the list of audio file extensions.
#[must_use]
pub fn audio_extensions() -> &'static [&'static str] {
    AUDIO_EXTENSIONS
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Remove every character in [`ILLEGAL_FILENAME_CHARS`] from `stem`.
///
/// Idempotent: sanitizing an already sanitized name returns it unchanged.
///
/// # Examples
///
/// ```
/// use convertforge_common::paths::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("clip: part 1?"), "clip part 1");
/// assert_eq!(sanitize_file_stem("plain"), "plain");
/// ```
pub fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c))
        .collect()
}

/// Check whether `name` contains a character illegal in file names.
pub fn has_illegal_chars(name: &str) -> bool {
    name.chars()
        .any(|c| c == '\0' || ILLEGAL_FILENAME_CHARS.contains(&c))
}

/// Build the output file name for `input`: the sanitized stem plus `extension`.
///
/// Returns `None` when the input has no file name component or when nothing
/// is left of the stem after sanitizing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use convertforge_common::paths::output_file_name;
///
/// let name = output_file_name(Path::new("/in/holiday|2024.png"), "jpg");
/// assert_eq!(name.as_deref(), Some("holiday2024.jpg"));
/// ```
pub fn output_file_name(input: &Path, extension: &str) -> Option<String> {
    let stem = sanitize_file_stem(&input.file_stem()?.to_string_lossy());
    if stem.is_empty() {
        return None;
    }
    Some(format!("{}.{}", stem, extension))
}
