//! rpm/dnf backed package manager

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::{debug, info};

use super::PackageManager;
use crate::config::Settings;
use crate::error::{Result, execution, inventory};

/// Query format producing `name-version-release.arch` per line
const QUERY_FORMAT: &str = "%{NAME}-%{VERSION}-%{RELEASE}.%{ARCH}\\n";

/// Package manager that queries rpm and removes through dnf
#[derive(Debug, Clone)]
pub struct Dnf {
    rpm: String,
    dnf: String,
    osrelease: PathBuf,
    stdout_to_stderr: bool,
}

impl Dnf {
    pub fn new(rpm: impl Into<String>, dnf: impl Into<String>, osrelease: impl Into<PathBuf>) -> Self {
        Self {
            rpm: rpm.into(),
            dnf: dnf.into(),
            osrelease: osrelease.into(),
            stdout_to_stderr: false,
        }
    }

    /// Send dnf's own output to stderr, keeping stdout for `--json`
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.rpm_command.clone(),
            settings.dnf_command.clone(),
            settings.osrelease_path.clone(),
        )
        .with_stdout_to_stderr(settings.json)
    }

    fn run_dnf(&self, operation: &str, args: &[&str], packages: &[&str]) -> Result<()> {
        info!(program = %self.dnf, ?args, count = packages.len(), "running {operation}");

        // Output is inherited so callers see the package manager's own progress
        let mut command = Command::new(&self.dnf);
        command.args(args).args(packages);
        if self.stdout_to_stderr {
            command.stdout(Stdio::from(std::io::stderr()));
        }

        let status = command
            .status()
            .map_err(|e| execution::failed(operation, format!("{}: {e}", self.dnf)))?;

        if status.success() {
            Ok(())
        } else {
            Err(execution::failed(operation, status.to_string()))
        }
    }
}

impl PackageManager for Dnf {
    fn list_installed(&self, pattern: &str) -> Result<Vec<String>> {
        debug!(program = %self.rpm, pattern, "querying installed packages");

        let output = Command::new(&self.rpm)
            .args(["-qa", "--queryformat", QUERY_FORMAT, pattern])
            .output()
            .map_err(|e| inventory::command_failed(&self.rpm, e))?;

        if !output.status.success() {
            return Err(inventory::command_failed(&self.rpm, failure_text(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn running_release(&self) -> Result<String> {
        let release = std::fs::read_to_string(&self.osrelease).map_err(|e| {
            inventory::unavailable(format!(
                "cannot read kernel release from {}: {e}",
                self.osrelease.display()
            ))
        })?;

        let release = release.trim();
        if release.is_empty() {
            return Err(inventory::unavailable(format!(
                "no running kernel release in {}",
                self.osrelease.display()
            )));
        }
        Ok(release.to_string())
    }

    fn remove(&self, packages: &BTreeSet<String>) -> Result<()> {
        let packages: Vec<&str> = packages.iter().map(String::as_str).collect();
        self.run_dnf("dnf remove", &["remove", "-y"], &packages)
    }

    fn autoremove(&self) -> Result<()> {
        self.run_dnf("dnf autoremove", &["autoremove", "-y"], &[])
    }
}

fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        format!("{}: {stderr}", output.status)
    }
}
