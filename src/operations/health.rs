//! Read-only health report

use serde::Serialize;

use crate::config::Settings;
use crate::domain::PackageKind;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::policy::{RetentionPolicy, sorted_versions};
use crate::system::PackageManager;

/// Summary printed by `--health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Running kernel release
    pub running: String,
    pub installed_core_count: usize,
    pub distinct_versions: usize,
    pub keep: usize,
    /// Kernel versions the current keep count would remove
    pub candidate_count: usize,
}

/// Build the health report without mutating anything
pub fn check(settings: &Settings, manager: &dyn PackageManager) -> Result<HealthReport> {
    let inventory = Inventory::new(manager, &settings.package_pattern);
    let packages = inventory.list_kernel_packages()?;
    let running = inventory.running_kernel()?;

    let decision = RetentionPolicy::from_settings(settings).partition(&packages)?;

    Ok(HealthReport {
        running: running.release,
        installed_core_count: packages
            .iter()
            .filter(|package| package.kind == PackageKind::Core)
            .count(),
        distinct_versions: sorted_versions(&packages).len(),
        keep: settings.keep,
        candidate_count: decision.remove_candidates.len(),
    })
}
