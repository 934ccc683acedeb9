//! Retention policy
//!
//! Decides which kernel versions stay and which go, then turns the removal
//! candidates into a [`RemovalPlan`]:
//!
//! 1. Collect the distinct versions of the bootable kernel packages
//!    (`kernel`, `kernel-core`, `kernel-*-core`)
//! 2. Sort them newest first with rpm ordering (stable, so equal-ranking
//!    versions keep their listing order)
//! 3. Keep the first `keep_count`, mark the rest as removal candidates
//! 4. Expand every candidate into its full package footprint. Packages whose
//!    version matches no bootable kernel (`kernel-srpm-macros`, a newer
//!    `kernel-headers`) are never touched.
//! 5. Unless forced, move the running kernel's footprint into `blocked`
//!
//! A policy that would keep nothing while kernels are installed is rejected
//! before any package name is produced.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{info, warn};

use crate::config::Settings;
use crate::domain::{
    BlockReason, InstalledPackage, KernelVersion, RemovalPlan, RetentionDecision, RunningKernel,
};
use crate::error::{Result, policy};
use crate::resolver::expand;

/// Keep-count and running-kernel rules for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub keep_count: usize,
    pub force: bool,
}

impl RetentionPolicy {
    pub fn new(keep_count: usize, force: bool) -> Self {
        Self { keep_count, force }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.keep, settings.force)
    }

    /// Split the installed versions into keep and remove-candidate lists
    ///
    /// # Errors
    ///
    /// Returns [`EmptyKeepSet`](crate::error::AutocleanError::EmptyKeepSet)
    /// when kernels are installed but none would be kept.
    pub fn partition(&self, inventory: &[InstalledPackage]) -> Result<RetentionDecision> {
        let mut keep = sorted_versions(inventory);
        let remove_candidates = keep.split_off(self.keep_count.min(keep.len()));

        if keep.is_empty() && !remove_candidates.is_empty() {
            return Err(policy::empty_keep_set(
                self.keep_count,
                remove_candidates.len(),
            ));
        }

        Ok(RetentionDecision {
            keep,
            remove_candidates,
        })
    }

    /// Build the safety-filtered removal plan
    ///
    /// `dry_run` is recorded in the plan and has no effect on the decision.
    pub fn decide(
        &self,
        inventory: &[InstalledPackage],
        running: &RunningKernel,
        dry_run: bool,
    ) -> Result<RemovalPlan> {
        let decision = self.partition(inventory)?;

        let mut proposed = BTreeSet::new();
        for version in &decision.remove_candidates {
            proposed.extend(expand(version, inventory));
        }

        let mut blocked = BTreeMap::new();
        if decision.remove_candidates.contains(&running.version) {
            let footprint = expand(&running.version, inventory);
            if self.force {
                warn!(
                    running = %running.version,
                    packages = footprint.len(),
                    "--force given: the running kernel will be removed"
                );
            } else {
                warn!(
                    running = %running.version,
                    packages = footprint.len(),
                    "running kernel is a removal candidate; keeping its packages"
                );
                for name in footprint {
                    proposed.remove(&name);
                    blocked.insert(name, BlockReason::RunningKernel);
                }
            }
        } else if !inventory
            .iter()
            .any(|package| package.is_bootable() && package.version == running.version)
        {
            warn!(
                running = %running.release,
                "running kernel is not among the installed packages"
            );
        }

        info!(
            keep = decision.keep.len(),
            remove = decision.remove_candidates.len(),
            packages = proposed.len(),
            blocked = blocked.len(),
            "retention decision made"
        );

        Ok(RemovalPlan::new(
            running, decision, proposed, blocked, dry_run,
        ))
    }
}

/// Distinct bootable kernel versions in the inventory, newest first
///
/// Versions that rank equal under rpm ordering keep their first-listed order.
pub fn sorted_versions(inventory: &[InstalledPackage]) -> Vec<KernelVersion> {
    let mut seen = HashSet::new();
    let mut versions: Vec<KernelVersion> = inventory
        .iter()
        .filter(|package| package.is_bootable())
        .filter(|package| seen.insert(&package.version))
        .map(|package| package.version.clone())
        .collect();

    versions.sort_by(|a, b| b.compare(a));
    versions
}
