//! Removal execution and best-effort collaborator errors

use super::AutocleanError;

/// Creates an execution failed error
pub fn failed(operation: impl Into<String>, reason: impl Into<String>) -> AutocleanError {
    AutocleanError::ExecutionFailed {
        operation: operation.into(),
        reason: reason.into(),
    }
}

/// Creates a best-effort failure for the audit log
pub fn log_failed(reason: impl Into<String>) -> AutocleanError {
    AutocleanError::NotifyOrLogFailed {
        channel: "audit log".to_string(),
        reason: reason.into(),
    }
}

/// Creates a best-effort failure for desktop notifications
pub fn notify_failed(reason: impl Into<String>) -> AutocleanError {
    AutocleanError::NotifyOrLogFailed {
        channel: "notification".to_string(),
        reason: reason.into(),
    }
}
