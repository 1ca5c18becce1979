//! Builder for executing external tool commands.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::{Error, Result};

/// Output captured from a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A builder for constructing and executing external tool invocations.
///
/// Execution blocks until the process exits. There is no timeout: a running
/// transcode cannot be interrupted.
///
/// # Example
///
/// ```no_run
/// use convertforge_av::ToolCommand;
/// use std::path::PathBuf;
///
/// let output = ToolCommand::new(PathBuf::from("ffmpeg"))
///     .arg("-i").arg("/path/to/input.avi")
///     .arg("-y").arg("/path/to/output.mp4")
///     .execute()?;
/// println!("{}", output.stderr);
/// # Ok::<(), convertforge_av::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args<I, S>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(iter.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Arguments collected so far.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Short program name used in error messages.
    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Execute the command, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// - [`Error::ToolNotFound`] if the program does not exist.
    /// - [`Error::ToolFailed`] if the process exits with a non-zero status;
    ///   the error carries the process's stderr unmodified.
    /// - [`Error::Io`] if spawning or waiting fails for another reason.
    pub fn execute(&self) -> Result<ToolOutput> {
        let program_name = self.program_name();

        #[cfg(feature = "tracing")]
        tracing::debug!("Running {:?} {:?}", self.program, self.args);

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(program_name.clone())
                } else {
                    Error::Io(e)
                }
            })?;

        let tool_output = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            #[cfg(feature = "tracing")]
            tracing::debug!("{} exited with status {}", program_name, output.status);
            return Err(Error::tool_failed(program_name, tool_output.stderr));
        }

        Ok(tool_output)
    }
}
