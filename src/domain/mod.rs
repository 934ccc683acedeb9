//! Domain models for dnf-autoclean
//!
//! This module contains pure domain objects representing kernel builds,
//! installed packages and removal plans. These types perform no I/O.

pub mod package;
pub mod plan;
pub mod version;

pub use package::{InstalledPackage, PackageKind, RunningKernel};
pub use plan::{BlockReason, RemovalPlan, RetentionDecision};
pub use version::KernelVersion;
