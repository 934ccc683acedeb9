//! Package inventory errors

use super::AutocleanError;

/// Creates an inventory unavailable error
pub fn unavailable(reason: impl Into<String>) -> AutocleanError {
    AutocleanError::InventoryUnavailable {
        reason: reason.into(),
    }
}

/// Creates an inventory error for a command that could not be run or exited non-zero
pub fn command_failed(program: &str, reason: impl std::fmt::Display) -> AutocleanError {
    AutocleanError::InventoryUnavailable {
        reason: format!("{program}: {reason}"),
    }
}
