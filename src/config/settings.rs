//! Resolved runtime settings
//!
//! Precedence is command-line flag, then configuration file, then default.
//! The resulting [`Settings`] is built once at the command boundary and
//! passed down by reference; nothing below it reads ambient state.

use std::path::PathBuf;

use super::FileConfig;
use crate::cli::Cli;
use crate::error::{Result, config};

pub const DEFAULT_KEEP: usize = 2;
pub const DEFAULT_LOG_PATH: &str = "/var/log/dnf-autoclean.log";
pub const DEFAULT_PACKAGE_PATTERN: &str = "kernel*";
pub const DEFAULT_OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Immutable configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub keep: usize,
    pub dry_run: bool,
    pub force: bool,
    pub verbose: bool,
    pub json: bool,
    pub log_path: PathBuf,
    pub package_pattern: String,
    pub rpm_command: String,
    pub dnf_command: String,
    pub osrelease_path: PathBuf,
    pub notify: bool,
    pub notify_command: String,
    pub autoremove: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keep: DEFAULT_KEEP,
            dry_run: false,
            force: false,
            verbose: false,
            json: false,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            package_pattern: DEFAULT_PACKAGE_PATTERN.to_string(),
            rpm_command: "rpm".to_string(),
            dnf_command: "dnf".to_string(),
            osrelease_path: PathBuf::from(DEFAULT_OSRELEASE_PATH),
            notify: true,
            notify_command: "notify-send".to_string(),
            autoremove: true,
        }
    }
}

impl Settings {
    /// Merge command-line flags over the configuration file
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let settings = Self {
            keep: cli.keep.or(file.keep).unwrap_or(defaults.keep),
            dry_run: cli.dry_run || file.dry_run.unwrap_or(defaults.dry_run),
            force: cli.force,
            verbose: cli.verbose,
            json: cli.json,
            log_path: cli.log.clone().or(file.log).unwrap_or(defaults.log_path),
            package_pattern: file.package_pattern.unwrap_or(defaults.package_pattern),
            rpm_command: file.rpm_command.unwrap_or(defaults.rpm_command),
            dnf_command: file.dnf_command.unwrap_or(defaults.dnf_command),
            osrelease_path: file.osrelease_path.unwrap_or(defaults.osrelease_path),
            notify: !cli.no_notify && file.notify.unwrap_or(defaults.notify),
            notify_command: file.notify_command.unwrap_or(defaults.notify_command),
            autoremove: !cli.no_autoremove && file.autoremove.unwrap_or(defaults.autoremove),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("package_pattern", &self.package_pattern),
            ("rpm_command", &self.rpm_command),
            ("dnf_command", &self.dnf_command),
            ("notify_command", &self.notify_command),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(config::invalid(format!("{key} must not be empty")));
            }
        }

        if self.log_path.as_os_str().is_empty() {
            return Err(config::invalid("log path must not be empty"));
        }

        Ok(())
    }
}
