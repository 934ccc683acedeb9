//! Desktop notifications

use std::process::Command;

use super::Notifier;
use crate::error::{Result, execution};

/// Notifier running `notify-send <title> <message>`
#[derive(Debug, Clone)]
pub struct NotifySend {
    command: String,
}

impl NotifySend {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Notifier for NotifySend {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        let output = Command::new(&self.command)
            .arg(title)
            .arg(message)
            .output()
            .map_err(|e| execution::notify_failed(format!("{}: {e}", self.command)))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(execution::notify_failed(format!(
                "{} exited with {}",
                self.command, output.status
            )))
        }
    }
}

/// Notifier used when notifications are disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _title: &str, _message: &str) -> Result<()> {
        Ok(())
    }
}
