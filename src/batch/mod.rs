//! Batch conversion orchestration.
//!
//! A batch is a capped, ordered set of files converted one after another to a
//! single target format. Precondition failures ([`BatchError`]) stop the batch
//! before any file is read; per-file failures are recorded in the
//! [`ConversionReport`] and the batch moves on.

mod error;
mod error_log;
mod executor;
mod files;
mod output;
mod report;

pub use error::{BatchError, Result};
pub use error_log::{ErrorLog, DEFAULT_ERROR_LOG};
pub use executor::{
    convert_batch, run_batch, BatchRequest, BatchRunner, FileOutcome, FileProgress,
    ProgressCallback,
};
pub use files::{add_files, remove_file, AddedFiles, InputFileSet, DEFAULT_MAX_FILES};
pub use output::{resolve_output_directory, OutputPolicy};
pub use report::{ConversionReport, FileFailure, WrittenFile};
