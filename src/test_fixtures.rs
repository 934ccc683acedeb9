//! Test fixtures and in-memory collaborators.
//!
//! The decision engine and the orchestrator only see the traits in
//! [`crate::system`], so tests swap in these doubles instead of touching rpm,
//! dnf or the real audit log.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakePackageManager, MemoryAuditLog, RecordingNotifier};
//!
//! let manager = FakePackageManager::new(&["kernel-core-5.14.0-1.el9.x86_64"], "5.14.0-1.el9.x86_64");
//! let audit = MemoryAuditLog::default();
//! let notifier = RecordingNotifier::default();
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::domain::{InstalledPackage, RunningKernel};
use crate::error::{Result, execution, inventory};
use crate::inventory::parse_package;
use crate::system::{AuditLog, Notifier, PackageManager};

/// Sub-packages installed for every kernel version in [`kernel_build`]
pub const KERNEL_SUBPACKAGES: &[&str] = &[
    "kernel",
    "kernel-core",
    "kernel-modules",
    "kernel-modules-core",
    "kernel-devel",
];

/// Listing lines for one complete kernel build
pub fn kernel_build(version_release: &str) -> Vec<String> {
    KERNEL_SUBPACKAGES
        .iter()
        .map(|name| format!("{name}-{version_release}.x86_64"))
        .collect()
}

/// `rpm -qa 'kernel*'` as seen on a Fedora 40 workstation: two installonly
/// kernels (6.10.12 running) next to userspace packages built from a newer
/// kernel tree and the unrelated `kernel-srpm-macros`
pub fn fedora_listing() -> Vec<String> {
    let mut lines = Vec::new();
    for version in ["6.10.10-200.fc40", "6.10.12-200.fc40"] {
        for name in [
            "kernel",
            "kernel-core",
            "kernel-modules",
            "kernel-modules-core",
            "kernel-modules-extra",
        ] {
            lines.push(format!("{name}-{version}.x86_64"));
        }
    }
    lines.extend(
        [
            "kernel-headers-6.11.3-200.fc40.x86_64",
            "kernel-tools-6.11.3-200.fc40.x86_64",
            "kernel-tools-libs-6.11.3-200.fc40.x86_64",
            "kernel-srpm-macros-1.0-23.fc40.noarch",
        ]
        .map(String::from),
    );
    lines
}

/// Parse listing lines into installed packages
pub fn packages(lines: &[String]) -> Vec<InstalledPackage> {
    lines
        .iter()
        .map(|line| parse_package(line).expect("fixture line must parse"))
        .collect()
}

/// Running kernel for a `version-release` string
pub fn running(version_release: &str) -> RunningKernel {
    let release = format!("{version_release}.x86_64");
    RunningKernel {
        version: crate::domain::KernelVersion::from_kernel_release(&release)
            .expect("fixture release must parse"),
        release,
    }
}

/// Package manager double with canned listings and recorded mutations
#[derive(Debug, Default)]
pub struct FakePackageManager {
    lines: Vec<String>,
    release: String,
    unavailable: bool,
    fail_remove: bool,
    fail_autoremove: bool,
    patterns: RefCell<Vec<String>>,
    removed: RefCell<Vec<BTreeSet<String>>>,
    autoremove_calls: RefCell<usize>,
}

impl FakePackageManager {
    pub fn new(lines: &[&str], release: &str) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
            release: release.to_string(),
            ..Self::default()
        }
    }

    pub fn with_lines(lines: Vec<String>, release: &str) -> Self {
        Self {
            lines,
            release: release.to_string(),
            ..Self::default()
        }
    }

    /// A package database that cannot be queried
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn failing_autoremove(mut self) -> Self {
        self.fail_autoremove = true;
        self
    }

    pub fn listed_patterns(&self) -> Vec<String> {
        self.patterns.borrow().clone()
    }

    pub fn removed(&self) -> Vec<BTreeSet<String>> {
        self.removed.borrow().clone()
    }

    pub fn autoremove_calls(&self) -> usize {
        *self.autoremove_calls.borrow()
    }
}

impl PackageManager for FakePackageManager {
    fn list_installed(&self, pattern: &str) -> Result<Vec<String>> {
        self.patterns.borrow_mut().push(pattern.to_string());
        if self.unavailable {
            return Err(inventory::command_failed("rpm", "database locked"));
        }
        Ok(self.lines.clone())
    }

    fn running_release(&self) -> Result<String> {
        if self.unavailable {
            return Err(inventory::unavailable("cannot read kernel release"));
        }
        Ok(self.release.clone())
    }

    fn remove(&self, packages: &BTreeSet<String>) -> Result<()> {
        self.removed.borrow_mut().push(packages.clone());
        if self.fail_remove {
            return Err(execution::failed("dnf remove", "exit status: 1"));
        }
        Ok(())
    }

    fn autoremove(&self) -> Result<()> {
        *self.autoremove_calls.borrow_mut() += 1;
        if self.fail_autoremove {
            return Err(execution::failed("dnf autoremove", "exit status: 1"));
        }
        Ok(())
    }
}

/// Audit log kept in memory
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    lines: RefCell<Vec<String>>,
    broken: bool,
}

impl MemoryAuditLog {
    /// An audit log whose every append fails
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }
}

impl AuditLog for MemoryAuditLog {
    fn append(&self, message: &str) -> Result<()> {
        if self.broken {
            return Err(execution::log_failed("read-only file system"));
        }
        self.lines.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// Notifier recording every notification
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
    broken: bool,
}

impl RecordingNotifier {
    /// A notifier whose every call fails
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        if self.broken {
            return Err(execution::notify_failed("no session bus"));
        }
        self.sent
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}
