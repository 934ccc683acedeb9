//! Common test utilities for dnf-autoclean integration tests
//!
//! [`TestHost`] builds a throwaway "system" in a temp directory: fake `rpm`
//! and `dnf` scripts, a kernel release file, an audit log path and a config
//! file pointing at all of them. The binary never touches the real package
//! database.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Sub-packages installed for every kernel version
pub const KERNEL_SUBPACKAGES: &[&str] = &[
    "kernel",
    "kernel-core",
    "kernel-modules",
    "kernel-modules-core",
    "kernel-devel",
];

/// A fake host with kernels installed
pub struct TestHost {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestHost {
    /// Host with one full kernel build per `version-release`, running `running`
    pub fn new(versions: &[&str], running: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let host = Self { temp, path };

        let lines: Vec<String> = versions.iter().flat_map(|v| kernel_build(v)).collect();
        host.set_installed(&lines);
        host.write_file("osrelease", &format!("{running}.x86_64\n"));
        // Like the real dnf, print transaction text on stdout
        host.write_script(
            "dnf",
            &format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\necho 'Dependencies resolved.'\necho 'Complete!'\n",
                host.path.join("dnf-calls").display()
            ),
        );
        host.write_config("");
        host
    }

    /// Replace the package listing printed by the fake rpm
    pub fn set_installed(&self, lines: &[String]) {
        let mut listing = lines.join("\n");
        listing.push('\n');
        self.write_file("installed", &listing);
        self.write_script(
            "rpm",
            &format!(
                "#!/bin/sh\ncat '{}'\n",
                self.path.join("installed").display()
            ),
        );
    }

    /// Make the fake rpm fail like a locked database
    pub fn break_rpm(&self) {
        self.write_script(
            "rpm",
            "#!/bin/sh\necho 'error: rpmdb open failed' >&2\nexit 1\n",
        );
    }

    /// Make the fake dnf fail after recording its arguments
    pub fn break_dnf(&self) {
        self.write_script(
            "dnf",
            &format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\nexit 1\n",
                self.path.join("dnf-calls").display()
            ),
        );
    }

    /// Write the config file, with `extra` YAML appended to the host wiring
    pub fn write_config(&self, extra: &str) {
        let config = format!(
            "rpm_command: {}\n\
             dnf_command: {}\n\
             osrelease_path: {}\n\
             log: {}\n\
             notify: false\n\
             {extra}",
            self.path.join("rpm").display(),
            self.path.join("dnf").display(),
            self.path.join("osrelease").display(),
            self.log_path().display(),
        );
        self.write_file("config.yaml", &config);
    }

    pub fn config_path(&self) -> PathBuf {
        self.path.join("config.yaml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.path.join("autoclean.log")
    }

    /// Argument lines the fake dnf was called with
    pub fn dnf_calls(&self) -> Vec<String> {
        match std::fs::read_to_string(self.path.join("dnf-calls")) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn audit_log(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// dnf-autoclean command wired to this host's config
    pub fn cmd(&self) -> Command {
        let mut cmd = dnf_autoclean_cmd();
        cmd.env_remove("DNF_AUTOCLEAN_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write file");
    }

    fn write_script(&self, name: &str, content: &str) {
        let path = self.path.join(name);
        std::fs::write(&path, content).expect("Failed to write script");
        make_executable(&path);
    }
}

/// Listing lines for one complete kernel build
pub fn kernel_build(version_release: &str) -> Vec<String> {
    KERNEL_SUBPACKAGES
        .iter()
        .map(|name| format!("{name}-{version_release}.x86_64"))
        .collect()
}

/// `rpm -qa 'kernel*'` on a Fedora 40 host: kernels 6.10.10 and 6.10.12,
/// userspace packages from a newer kernel tree and `kernel-srpm-macros`
pub fn fedora_listing() -> Vec<String> {
    let mut lines = Vec::new();
    for version in ["6.10.10-200.fc40", "6.10.12-200.fc40"] {
        for name in [
            "kernel",
            "kernel-core",
            "kernel-modules",
            "kernel-modules-core",
            "kernel-modules-extra",
        ] {
            lines.push(format!("{name}-{version}.x86_64"));
        }
    }
    lines.push("kernel-headers-6.11.3-200.fc40.x86_64".to_string());
    lines.push("kernel-tools-6.11.3-200.fc40.x86_64".to_string());
    lines.push("kernel-tools-libs-6.11.3-200.fc40.x86_64".to_string());
    lines.push("kernel-srpm-macros-1.0-23.fc40.noarch".to_string());
    lines
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn dnf_autoclean_cmd() -> Command {
    Command::cargo_bin("dnf-autoclean").expect("binary must be built")
}

fn make_executable(path: &Path) {
    let mut permissions = std::fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions).expect("Failed to chmod script");
}
