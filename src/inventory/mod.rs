//! Package inventory reader
//!
//! Turns raw package-database listings into [`InstalledPackage`] records and
//! resolves the running kernel. Performs no mutation.

pub mod extract;

use tracing::debug;

use crate::domain::{InstalledPackage, KernelVersion, RunningKernel};
use crate::error::{Result, inventory};
use crate::system::PackageManager;

pub use extract::parse_package;

/// Read-only view of the installed kernel packages
pub struct Inventory<'a> {
    manager: &'a dyn PackageManager,
    pattern: &'a str,
}

impl<'a> Inventory<'a> {
    pub fn new(manager: &'a dyn PackageManager, pattern: &'a str) -> Self {
        Self { manager, pattern }
    }

    /// Installed kernel-family packages in listing order
    ///
    /// An empty result is a valid state, not an error. Lines that do not
    /// parse as kernel packages are skipped.
    pub fn list_kernel_packages(&self) -> Result<Vec<InstalledPackage>> {
        let lines = self.manager.list_installed(self.pattern)?;

        let packages = lines
            .iter()
            .filter_map(|line| {
                let package = parse_package(line);
                if package.is_none() {
                    debug!(line = %line, "skipping unrecognized package listing");
                }
                package
            })
            .collect();

        Ok(packages)
    }

    /// The kernel currently booted
    pub fn running_kernel(&self) -> Result<RunningKernel> {
        let release = self.manager.running_release()?;
        let version = KernelVersion::from_kernel_release(&release).ok_or_else(|| {
            inventory::unavailable(format!("unrecognized running kernel release '{release}'"))
        })?;

        Ok(RunningKernel { release, version })
    }
}
