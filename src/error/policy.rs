//! Retention policy errors

use super::AutocleanError;

/// Creates an empty keep set error
pub fn empty_keep_set(keep_count: usize, installed: usize) -> AutocleanError {
    AutocleanError::EmptyKeepSet {
        keep_count,
        installed,
    }
}
