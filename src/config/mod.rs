//! Configuration handling for dnf-autoclean
//!
//! This module contains:
//! - [`file`]: the optional `dnf-autoclean.yaml` configuration file
//! - [`settings`]: the immutable [`Settings`] value resolved from flags,
//!   the configuration file and built-in defaults

pub mod file;
pub mod settings;

pub use file::FileConfig;
pub use settings::Settings;
