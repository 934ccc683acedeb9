//! Append-only audit log file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::AuditLog;
use crate::error::{Result, execution};

/// Audit log appending timestamped lines to a file
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditLog for FileAuditLog {
    fn append(&self, message: &str) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| execution::log_failed(format!("{}: {e}", self.path.display())))?;

        writeln!(file, "{timestamp} {message}")
            .map_err(|e| execution::log_failed(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutocleanError;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_and_appends() {
        let temp = TempDir::new().unwrap();
        let log = FileAuditLog::new(temp.path().join("autoclean.log"));

        log.append("first").unwrap();
        log.append("second").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" first"));
        assert!(lines[1].ends_with(" second"));
    }

    #[test]
    fn test_append_to_unwritable_path() {
        let temp = TempDir::new().unwrap();
        let log = FileAuditLog::new(temp.path().join("missing-dir").join("autoclean.log"));

        let err = log.append("message").unwrap_err();
        assert!(matches!(err, AutocleanError::NotifyOrLogFailed { .. }));
    }
}
