//! Installed kernel package domain types

use std::fmt;

use serde::Serialize;

use super::KernelVersion;

/// Role a package plays within one kernel build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    /// The `kernel` package itself
    Kernel,
    Core,
    Devel,
    Headers,
    Modules,
    ModulesExtra,
    Other,
}

impl PackageKind {
    /// Classify a package name (without version or arch).
    ///
    /// Returns `None` for names outside the `kernel` / `kernel-*` family,
    /// e.g. `kernelshark`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name != "kernel" && !name.starts_with("kernel-") {
            return None;
        }

        let kind = match name {
            "kernel" => PackageKind::Kernel,
            "kernel-core" => PackageKind::Core,
            "kernel-devel" | "kernel-devel-matched" => PackageKind::Devel,
            "kernel-headers" => PackageKind::Headers,
            "kernel-modules" | "kernel-modules-core" => PackageKind::Modules,
            "kernel-modules-extra" => PackageKind::ModulesExtra,
            // kernel-debug-core, kernel-rt-core, kernel-64k-core, ...
            _ if name.ends_with("-core") => PackageKind::Core,
            _ => PackageKind::Other,
        };
        Some(kind)
    }

    /// Whether packages of this kind carry a bootable kernel image.
    ///
    /// Only these define kernel versions. `kernel-headers`, `kernel-tools`
    /// and `kernel-srpm-macros` are versioned on their own and merely join
    /// the footprint of a bootable version they happen to match.
    pub fn is_bootable(self) -> bool {
        matches!(self, PackageKind::Kernel | PackageKind::Core)
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PackageKind::Kernel => "kernel",
            PackageKind::Core => "core",
            PackageKind::Devel => "devel",
            PackageKind::Headers => "headers",
            PackageKind::Modules => "modules",
            PackageKind::ModulesExtra => "modules-extra",
            PackageKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// One installed kernel-family package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledPackage {
    /// Package token as listed by the package database, arch included.
    /// This is what gets passed to the package manager for removal.
    pub name: String,

    pub kind: PackageKind,

    pub version: KernelVersion,
}

impl InstalledPackage {
    pub fn is_bootable(&self) -> bool {
        self.kind.is_bootable()
    }
}

/// The kernel build currently booted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningKernel {
    /// Raw kernel release string (`uname -r` form)
    pub release: String,

    pub version: KernelVersion,
}

impl fmt::Display for RunningKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.release)
    }
}
