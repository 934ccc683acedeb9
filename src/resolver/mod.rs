//! Footprint resolver
//!
//! Maps a kernel version to every installed package built from it. The same
//! lookup serves removal candidates and the running kernel, so the safety
//! filter sees the running kernel's devel, headers and modules packages too,
//! not only the package whose name matches the release string.

use std::collections::BTreeSet;

use crate::domain::{InstalledPackage, KernelVersion};

/// Names of all installed packages whose version equals `version`
pub fn expand(version: &KernelVersion, inventory: &[InstalledPackage]) -> BTreeSet<String> {
    inventory
        .iter()
        .filter(|package| &package.version == version)
        .map(|package| package.name.clone())
        .collect()
}
