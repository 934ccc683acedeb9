//! Error types and handling for dnf-autoclean
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`inventory`]: Package database and kernel release errors
//! - [`policy`]: Retention policy errors
//! - [`execution`]: Removal and best-effort collaborator errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod execution;
pub mod inventory;
pub mod policy;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dnf-autoclean operations
#[derive(Error, Diagnostic, Debug)]
pub enum AutocleanError {
    // Inventory errors
    #[error("Package inventory unavailable: {reason}")]
    #[diagnostic(
        code(dnf_autoclean::inventory::unavailable),
        help("Check that rpm is installed and the kernel release can be read")
    )]
    InventoryUnavailable { reason: String },

    // Policy errors
    #[error("Refusing to remove every installed kernel: keep count {keep_count} retains none of {installed} version(s)")]
    #[diagnostic(
        code(dnf_autoclean::policy::empty_keep_set),
        help("Use --keep 1 or higher")
    )]
    EmptyKeepSet { keep_count: usize, installed: usize },

    // Execution errors
    #[error("{operation} failed: {reason}")]
    #[diagnostic(
        code(dnf_autoclean::execution::failed),
        help("The removal plan is unchanged; rerun once the package manager problem is fixed")
    )]
    ExecutionFailed { operation: String, reason: String },

    #[error("Best-effort {channel} failed: {reason}")]
    #[diagnostic(code(dnf_autoclean::execution::notify_or_log_failed))]
    NotifyOrLogFailed { channel: String, reason: String },

    // Config errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(dnf_autoclean::config::not_found),
        help("Check --config or the DNF_AUTOCLEAN_CONFIG environment variable")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(dnf_autoclean::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(dnf_autoclean::config::invalid))]
    ConfigInvalid { message: String },

    // General I/O
    #[error("IO error: {message}")]
    #[diagnostic(code(dnf_autoclean::io))]
    IoError { message: String },
}

impl AutocleanError {
    /// Process exit code for this error
    ///
    /// Execution failures exit with 1 so callers can tell a failed removal
    /// apart from a run that never attempted one.
    pub fn exit_code(&self) -> i32 {
        match self {
            AutocleanError::ExecutionFailed { .. } => 1,
            AutocleanError::ConfigNotFound { .. }
            | AutocleanError::ConfigParseFailed { .. }
            | AutocleanError::ConfigInvalid { .. } => 2,
            AutocleanError::InventoryUnavailable { .. } => 3,
            AutocleanError::EmptyKeepSet { .. } => 4,
            AutocleanError::NotifyOrLogFailed { .. } | AutocleanError::IoError { .. } => 5,
        }
    }
}

impl From<std::io::Error> for AutocleanError {
    fn from(err: std::io::Error) -> Self {
        AutocleanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AutocleanError {
    fn from(err: serde_yaml::Error) -> Self {
        AutocleanError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AutocleanError {
    fn from(err: serde_json::Error) -> Self {
        AutocleanError::IoError {
            message: format!("Failed to serialize output: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AutocleanError>;
