//! System collaborators
//!
//! The retention logic never talks to the host directly. It goes through
//! these traits so the decision engine can be exercised against in-memory
//! doubles, and so every external program is invoked with an explicit
//! argument vector rather than a shell string.

pub mod audit;
pub mod dnf;
pub mod notify;

use std::collections::BTreeSet;

use crate::error::Result;

pub use audit::FileAuditLog;
pub use dnf::Dnf;
pub use notify::{NotifySend, Silent};

/// Package database and package manager operations
pub trait PackageManager {
    /// Raw listing lines (`name-version-release.arch`) of installed packages matching `pattern`
    fn list_installed(&self, pattern: &str) -> Result<Vec<String>>;

    /// Release string of the running kernel (`uname -r` form)
    fn running_release(&self) -> Result<String>;

    /// Remove the given packages in a single transaction
    fn remove(&self, packages: &BTreeSet<String>) -> Result<()>;

    /// Remove dependencies no longer required by anything
    fn autoremove(&self) -> Result<()>;
}

/// Append-only audit trail
pub trait AuditLog {
    fn append(&self, message: &str) -> Result<()>;
}

/// Desktop notifications
pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<()>;
}
