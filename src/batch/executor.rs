//! Sequential batch execution.

use std::path::Path;

use convertforge_av::{CodecBackend, ConversionJob, EncodePlan, TargetFormat};
use convertforge_common::paths::output_file_name;
use convertforge_common::MediaKind;

use super::error::{BatchError, Result};
use super::error_log::ErrorLog;
use super::files::InputFileSet;
use super::output::{resolve_output_directory, OutputPolicy};
use super::report::ConversionReport;
use crate::formats::lookup_target;

/// How a single file ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome<'a> {
    Converted { output: &'a Path, format: &'a str },
    Failed { reason: &'a str },
}

/// Progress notification sent after each file.
#[derive(Debug, Clone, Copy)]
pub struct FileProgress<'a> {
    /// 1-based position in the batch.
    pub index: usize,
    pub total: usize,
    pub file_name: &'a str,
    pub input: &'a Path,
    pub outcome: FileOutcome<'a>,
}

/// Progress callback type
pub type ProgressCallback<'a> = Box<dyn FnMut(&FileProgress<'_>) + 'a>;

/// Everything a batch needs besides the backend.
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    pub kind: MediaKind,
    pub files: &'a InputFileSet,
    /// Target label or extension as the user typed it.
    pub target: Option<&'a str>,
    pub output: &'a OutputPolicy,
}

/// Runs batches against a backend, one file at a time.
pub struct BatchRunner<'a> {
    backend: &'a dyn CodecBackend,
    error_log: Option<ErrorLog>,
    progress_callback: Option<ProgressCallback<'a>>,
}

impl<'a> BatchRunner<'a> {
    pub fn new(backend: &'a dyn CodecBackend) -> Self {
        Self {
            backend,
            error_log: None,
            progress_callback: None,
        }
    }

    /// Append every per-file failure to `log`.
    pub fn with_error_log(mut self, log: ErrorLog) -> Self {
        self.error_log = Some(log);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback<'a>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    fn report_progress(&mut self, progress: &FileProgress<'_>) {
        if let Some(cb) = self.progress_callback.as_mut() {
            cb(progress);
        }
    }

    /// Check preconditions in order, resolve the output directory, then convert.
    pub fn run(&mut self, request: &BatchRequest<'_>) -> Result<ConversionReport> {
        if request.files.is_empty() {
            return Err(BatchError::empty(request.kind));
        }
        if request.output.base.is_none() {
            return Err(BatchError::NoOutputDirectory);
        }
        let label = request
            .target
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .ok_or(BatchError::NoTargetFormat)?;
        let target =
            lookup_target(request.kind, label).ok_or_else(|| BatchError::UnknownTargetFormat {
                kind: request.kind,
                label: label.to_string(),
            })?;
        let out_dir = resolve_output_directory(request.output, request.kind)?;

        self.convert(request.files, target, &out_dir)
    }

    /// Convert every file in `files` to `target` inside `out_dir`.
    ///
    /// Per-file failures are recorded in the report and never stop the batch.
    pub fn convert(
        &mut self,
        files: &InputFileSet,
        target: TargetFormat,
        out_dir: &Path,
    ) -> Result<ConversionReport> {
        if files.is_empty() {
            return Err(BatchError::EmptyFileSet("files"));
        }

        let total = files.len();
        let plan = EncodePlan::for_target(target);
        let mut report = ConversionReport::new(target, out_dir, total);
        tracing::info!("Converting {} file(s) to {} in {:?}", total, target, out_dir);

        for (i, input) in files.iter().enumerate() {
            let file_name = input
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.display().to_string());

            let result = match output_file_name(input, target.extension()) {
                Some(name) => {
                    let output = out_dir.join(name);
                    self.backend.convert(&ConversionJob {
                        input,
                        output: &output,
                        target,
                        plan: plan.clone(),
                    })
                }
                None => Err(convertforge_av::Error::InvalidInput(format!(
                    "no usable file name in {}",
                    input.display()
                ))),
            };

            let reason;
            let progress_outcome;
            match &result {
                Ok(written) => {
                    tracing::debug!("Converted {:?} -> {:?}", input, written.path);
                    report.record_success(input, written);
                    progress_outcome = FileOutcome::Converted {
                        output: &written.path,
                        format: written.format,
                    };
                }
                Err(e) => {
                    reason = e.reason();
                    tracing::warn!("Failed to convert {:?}: {}", input, e);
                    report.record_failure(input, &file_name, reason.clone());
                    if let Some(log) = &self.error_log {
                        if let Err(log_err) = log.append(input, target.extension(), &reason) {
                            tracing::warn!(
                                "Could not write error log {:?}: {}",
                                log.path(),
                                log_err
                            );
                        }
                    }
                    progress_outcome = FileOutcome::Failed { reason: &reason };
                }
            }

            self.report_progress(&FileProgress {
                index: i + 1,
                total,
                file_name: &file_name,
                input,
                outcome: progress_outcome,
            });
        }

        tracing::info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }
}

/// Convert `files` to `target` in `out_dir`, calling `observer` after each file.
pub fn convert_batch(
    files: &InputFileSet,
    target: TargetFormat,
    out_dir: &Path,
    backend: &dyn CodecBackend,
    observer: &mut dyn FnMut(&FileProgress<'_>),
) -> Result<ConversionReport> {
    BatchRunner::new(backend)
        .with_progress_callback(Box::new(|p: &FileProgress<'_>| observer(p)))
        .convert(files, target, out_dir)
}

/// Validate `request` and run it. Preconditions fail before any file is touched.
pub fn run_batch(
    request: &BatchRequest<'_>,
    backend: &dyn CodecBackend,
    observer: &mut dyn FnMut(&FileProgress<'_>),
) -> Result<ConversionReport> {
    BatchRunner::new(backend)
        .with_progress_callback(Box::new(|p: &FileProgress<'_>| observer(p)))
        .run(request)
}
