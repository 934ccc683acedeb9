//! Retention decisions and removal plans

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use super::{KernelVersion, RunningKernel};

/// Keep/remove partition of the installed kernel versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionDecision {
    /// Retained versions, newest first
    pub keep: Vec<KernelVersion>,

    /// Versions eligible for removal, newest first
    pub remove_candidates: Vec<KernelVersion>,
}

/// Why a package was held back from removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockReason {
    #[serde(rename = "running kernel")]
    RunningKernel,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::RunningKernel => f.write_str("running kernel"),
        }
    }
}

/// Immutable description of what would be (or was) removed
///
/// `packages` and `blocked` are always disjoint.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalPlan {
    running: KernelVersion,
    keep: Vec<KernelVersion>,
    remove: Vec<KernelVersion>,
    packages: BTreeSet<String>,
    blocked: BTreeMap<String, BlockReason>,
    dry_run: bool,
}

impl RemovalPlan {
    pub(crate) fn new(
        running: &RunningKernel,
        decision: RetentionDecision,
        mut packages: BTreeSet<String>,
        blocked: BTreeMap<String, BlockReason>,
        dry_run: bool,
    ) -> Self {
        packages.retain(|name| !blocked.contains_key(name));
        Self {
            running: running.version.clone(),
            keep: decision.keep,
            remove: decision.remove_candidates,
            packages,
            blocked,
            dry_run,
        }
    }

    pub fn running(&self) -> &KernelVersion {
        &self.running
    }

    pub fn keep(&self) -> &[KernelVersion] {
        &self.keep
    }

    /// Candidate versions selected for removal, newest first
    pub fn remove(&self) -> &[KernelVersion] {
        &self.remove
    }

    pub fn packages(&self) -> &BTreeSet<String> {
        &self.packages
    }

    pub fn blocked(&self) -> &BTreeMap<String, BlockReason> {
        &self.blocked
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// One-line summary used for the audit trail
    pub fn summary(&self) -> String {
        format!(
            "keep=[{}] remove=[{}] packages={} blocked={} dry_run={}",
            join(&self.keep),
            join(&self.remove),
            self.packages.len(),
            self.blocked.len(),
            self.dry_run
        )
    }
}

fn join(versions: &[KernelVersion]) -> String {
    versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
