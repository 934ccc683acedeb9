//! Version extraction from package names
//!
//! A listed package token looks like `kernel-modules-extra-5.14.0-427.31.1.el9.x86_64`:
//! an optional arch suffix, then `release` after the last `-`, `version` after
//! the one before it, and the package name in front. Every sub-package of a
//! kernel build yields the same [`KernelVersion`].

use crate::domain::version::strip_arch;
use crate::domain::{InstalledPackage, KernelVersion, PackageKind};

/// Extract the kernel version key from a package name.
///
/// Returns `None` for names outside the kernel package family or without a
/// recognizable version-release token.
pub fn extract(package_name: &str) -> Option<KernelVersion> {
    let (name, evr) = split_name(package_name)?;
    PackageKind::from_name(name)?;
    KernelVersion::parse(evr)
}

/// Parse a raw listing line into an [`InstalledPackage`]
pub fn parse_package(line: &str) -> Option<InstalledPackage> {
    let name = line.trim();
    let version = extract(name)?;
    let kind = split_name(name).and_then(|(base, _)| PackageKind::from_name(base))?;
    Some(InstalledPackage {
        name: name.to_string(),
        kind,
        version,
    })
}

/// Split `name-version-release[.arch]` into the bare name and `version-release`
fn split_name(package_name: &str) -> Option<(&str, &str)> {
    let token = strip_arch(package_name.trim());

    let (rest, _release) = token.rsplit_once('-')?;
    let (name, _version) = rest.rsplit_once('-')?;
    Some((name, &token[name.len() + 1..]))
}
