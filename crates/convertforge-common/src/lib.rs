//! Convertforge-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across convertforge:
//!
//! - **Media kinds**: The three conversion domains (image, audio, video)
//! - **Path Utilities**: Extension classification and file name sanitization
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use convertforge_common::MediaKind;
//! use convertforge_common::paths::{is_image_file, sanitize_file_stem};
//! use std::path::Path;
//!
//! let kind: MediaKind = "video".parse().unwrap();
//! assert_eq!(kind, MediaKind::Video);
//!
//! assert!(is_image_file(Path::new("poster.png")));
//! assert_eq!(sanitize_file_stem("what?now"), "whatnow");
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
