//! Batch results.

use std::path::{Path, PathBuf};

use convertforge_av::{ConvertedOutput, TargetFormat};
use serde::Serialize;

/// A file that converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Extension of the format actually written.
    pub format: String,
    pub fell_back: bool,
}

/// A file that did not convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// File name of the input, without its directory.
    pub file_name: String,
    pub input: PathBuf,
    pub reason: String,
}

/// Summary of one batch. Built while the batch runs and frozen afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    requested_format: String,
    resulting_format: String,
    output_dir: PathBuf,
    total: usize,
    succeeded: usize,
    failed: usize,
    outputs: Vec<WrittenFile>,
    failures: Vec<FileFailure>,
}

impl ConversionReport {
    pub(crate) fn new(target: TargetFormat, output_dir: &Path, total: usize) -> Self {
        Self {
            requested_format: target.extension().to_string(),
            resulting_format: target.extension().to_string(),
            output_dir: output_dir.to_path_buf(),
            total,
            succeeded: 0,
            failed: 0,
            outputs: Vec::with_capacity(total),
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_success(&mut self, input: &Path, written: &ConvertedOutput) {
        self.succeeded += 1;
        if written.fell_back {
            self.resulting_format = written.format.to_string();
        }
        self.outputs.push(WrittenFile {
            input: input.to_path_buf(),
            output: written.path.clone(),
            format: written.format.to_string(),
            fell_back: written.fell_back,
        });
    }

    pub(crate) fn record_failure(&mut self, input: &Path, file_name: &str, reason: String) {
        self.failed += 1;
        self.failures.push(FileFailure {
            file_name: file_name.to_string(),
            input: input.to_path_buf(),
            reason,
        });
    }

    /// Extension of the requested target.
    pub fn requested_format(&self) -> &str {
        &self.requested_format
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn outputs(&self) -> &[WrittenFile] {
        &self.outputs
    }

    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    /// Failure reason for a file name, if that file failed.
    pub fn failure_for(&self, file_name: &str) -> Option<&str> {
        self.failures
            .iter()
            .find(|f| f.file_name == file_name)
            .map(|f| f.reason.as_str())
    }

    /// Format the batch actually produced.
    ///
    /// Equal to the requested format unless a file fell back, in which case
    /// it is the fallback format.
    pub fn resulting_format(&self) -> &str {
        &self.resulting_format
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Multi-line summary for a terminal.
    ///
    /// Counts, format and location only. Per-file reasons go out through
    /// progress notifications and the error log.
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Processed {} {}\n\nSuccess: {}\nErrors: {}\n\nFiles saved to: {}\nConverted {} {} to {}\n",
            self.total,
            noun,
            self.succeeded,
            self.failed,
            self.output_dir.display(),
            self.succeeded,
            noun,
            self.resulting_format().to_uppercase()
        )
    }
}
