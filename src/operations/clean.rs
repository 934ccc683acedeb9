//! Clean operation
//!
//! Sequences one run:
//!
//! ```text
//! INVENTORY -> DECIDE -> nothing to remove      -> success
//!                     -> dry run                -> report, notify, success
//!                     -> remove -> autoremove   -> log, notify, success
//!                               -> failure      -> log, notify, error
//! ```
//!
//! Validation errors surface before any package is removed. Execution is not
//! retried; a failed `dnf remove` leaves the plan unchanged for a later run.
//! Audit log and notification failures never change the result.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Settings;
use crate::domain::{InstalledPackage, RemovalPlan};
use crate::error::{AutocleanError, Result};
use crate::inventory::Inventory;
use crate::policy::RetentionPolicy;
use crate::system::{AuditLog, Notifier, PackageManager};
use crate::ui::Reporter;

const NOTIFY_TITLE: &str = "dnf-autoclean";

/// Final state of a successful run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "plan", rename_all = "kebab-case")]
pub enum CleanOutcome {
    NoKernelsInstalled,
    NothingToRemove(RemovalPlan),
    DryRun(RemovalPlan),
    Removed(RemovalPlan),
}

/// High-level clean operation
pub struct CleanOperation<'a> {
    settings: &'a Settings,
    manager: &'a dyn PackageManager,
    audit: &'a dyn AuditLog,
    notifier: &'a dyn Notifier,
    reporter: &'a dyn Reporter,
}

impl<'a> CleanOperation<'a> {
    pub fn new(
        settings: &'a Settings,
        manager: &'a dyn PackageManager,
        audit: &'a dyn AuditLog,
        notifier: &'a dyn Notifier,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            settings,
            manager,
            audit,
            notifier,
            reporter,
        }
    }

    /// Run the workflow, mirroring any failure to the audit log
    pub fn execute(&self) -> Result<CleanOutcome> {
        let result = self.run();
        if let Err(err) = &result {
            self.record(&format!("FAILED: {err}"));
            if matches!(err, AutocleanError::ExecutionFailed { .. }) {
                self.send(&format!("Kernel cleanup failed: {err}"));
            }
        }
        result
    }

    fn run(&self) -> Result<CleanOutcome> {
        info!(pattern = %self.settings.package_pattern, "reading kernel inventory");
        let inventory = Inventory::new(self.manager, &self.settings.package_pattern);
        let packages = inventory.list_kernel_packages()?;
        let running = inventory.running_kernel()?;

        if !packages.iter().any(InstalledPackage::is_bootable) {
            self.record("NOTHING TO REMOVE: no kernel packages installed");
            return Ok(CleanOutcome::NoKernelsInstalled);
        }

        let plan = RetentionPolicy::from_settings(self.settings).decide(
            &packages,
            &running,
            self.settings.dry_run,
        )?;
        self.record(&format!("PLAN {}", plan.summary()));
        self.reporter.plan(&running, &plan);

        if plan.is_empty() {
            self.record(&format!(
                "NOTHING TO REMOVE: keeping {} kernel version(s)",
                plan.keep().len()
            ));
            return Ok(CleanOutcome::NothingToRemove(plan));
        }

        if plan.dry_run() {
            self.record(&format!("DRY RUN: would remove {}", package_list(&plan)));
            self.send(&format!(
                "Dry run: {} kernel package(s) would be removed",
                plan.packages().len()
            ));
            return Ok(CleanOutcome::DryRun(plan));
        }

        info!(packages = plan.packages().len(), "removing kernel packages");
        self.manager.remove(plan.packages())?;

        if self.settings.autoremove {
            info!("removing unneeded dependencies");
            self.manager.autoremove()?;
        }

        self.record(&format!("REMOVED: {}", package_list(&plan)));
        self.send(&format!(
            "Removed {} old kernel package(s)",
            plan.packages().len()
        ));
        Ok(CleanOutcome::Removed(plan))
    }

    fn record(&self, message: &str) {
        if let Err(err) = self.audit.append(message) {
            debug!(error = %err, "audit log append failed");
        }
    }

    fn send(&self, message: &str) {
        if let Err(err) = self.notifier.notify(NOTIFY_TITLE, message) {
            debug!(error = %err, "notification failed");
        }
    }
}

fn package_list(plan: &RemovalPlan) -> String {
    plan.packages()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
