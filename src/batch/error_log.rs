//! Append-only log of failed conversions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default log file name, relative to the working directory.
pub const DEFAULT_ERROR_LOG: &str = "conversion_errors.log";

/// One line per failure: timestamp, input, requested format, error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a failure. The file is opened per call and created on first use.
    pub fn append(&self, input: &Path, format: &str, reason: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "[{}] Error converting {} to {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            input.display(),
            format,
            single_line(reason)
        )
    }
}

// Tool stderr is usually several lines; keep one entry per line of the log.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_one_line_per_failure() {
        let dir = tempfile::tempdir().unwrap();
        let log = ErrorLog::new(dir.path().join(DEFAULT_ERROR_LOG));

        log.append(Path::new("/in/a.avi"), "mp4", "first line\nsecond line\n")
            .unwrap();
        log.append(Path::new("/in/b.mov"), "mkv", "broken").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("Error converting /in/a.avi to mp4: first line | second line"));
        assert!(lines[1].ends_with("Error converting /in/b.mov to mkv: broken"));
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  a \n\n b\n"), "a | b");
        assert_eq!(single_line(""), "");
    }
}
