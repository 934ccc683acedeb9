//! Configuration file loading
//!
//! The file is optional. Lookup order when no path is given explicitly:
//! `/etc/dnf-autoclean.yaml`, then `dnf-autoclean.yaml` in the user's config
//! directory. Every key is optional; unknown keys (such as the `schedule`
//! the desktop front-end stores) are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, config};

/// System-wide configuration file
pub const SYSTEM_CONFIG_PATH: &str = "/etc/dnf-autoclean.yaml";

/// Configuration file name under the user's config directory
pub const CONFIG_FILE_NAME: &str = "dnf-autoclean.yaml";

/// Values read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub keep: Option<usize>,
    pub dry_run: Option<bool>,
    pub log: Option<PathBuf>,
    pub package_pattern: Option<String>,
    pub rpm_command: Option<String>,
    pub dnf_command: Option<String>,
    pub osrelease_path: Option<PathBuf>,
    pub notify: Option<bool>,
    pub notify_command: Option<String>,
    pub autoremove: Option<bool>,
}

impl FileConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from an explicit path or the default locations
    ///
    /// An explicitly named file must exist. Missing default files yield an
    /// empty configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(config::not_found(path.display().to_string()));
                }
                Self::load_from(path)
            }
            None => match default_config_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    let system = PathBuf::from(SYSTEM_CONFIG_PATH);
    if system.exists() {
        return Some(system);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
