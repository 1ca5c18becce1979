//! Convertforge - batch media format conversion
//!
//! This library crate exposes the batch orchestrator, the format tables and
//! configuration loading used by the `convertforge` binary.

pub mod batch;
pub mod config;
pub mod formats;
