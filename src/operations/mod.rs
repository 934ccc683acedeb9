//! Operations coordinating the inventory, the retention policy and the
//! package manager
//!
//! - [`CleanOperation`]: the full inventory → decide → remove workflow
//! - [`health`]: read-only summary for `--health`

pub mod clean;
pub mod health;

pub use clean::{CleanOperation, CleanOutcome};
pub use health::HealthReport;
