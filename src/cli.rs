//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// dnf-autoclean - remove old kernels safely
///
/// Keeps the newest kernels, removes the rest, and never removes the running kernel.
#[derive(Parser, Debug)]
#[command(
    name = "dnf-autoclean",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Remove old kernel packages while keeping the newest ones and the running kernel",
    long_about = "dnf-autoclean keeps the newest installed kernel versions, expands every older \
                  version into all of its packages (core, modules, devel, headers, ...) and \
                  removes them through dnf. The running kernel is never removed unless --force \
                  is given.\n\n\
                  Invocations must be serialized by the caller; the package manager's own lock \
                  is the only mutual exclusion.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  dnf-autoclean --dry-run\n    \
                  dnf-autoclean --keep 3 --verbose\n    \
                  dnf-autoclean --health\n    \
                  dnf-autoclean --dry-run --json\n    \
                  dnf-autoclean --completions bash > /etc/bash_completion.d/dnf-autoclean"
)]
pub struct Cli {
    /// Number of newest kernel versions to keep [default: 2]
    #[arg(long, value_name = "N")]
    pub keep: Option<usize>,

    /// Compute and display the removal plan without removing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Allow removing the running kernel (use with extreme caution)
    #[arg(long)]
    pub force: bool,

    /// Show running kernel, installed kernel count and removal candidates, then exit
    #[arg(long)]
    pub health: bool,

    /// Audit log file [default: /var/log/dnf-autoclean.log]
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Print keep/remove lists before execution
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print the plan or health report as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file
    #[arg(long, value_name = "PATH", env = "DNF_AUTOCLEAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not send a desktop notification
    #[arg(long)]
    pub no_notify: bool,

    /// Do not run `dnf autoremove` after removing kernels
    #[arg(long)]
    pub no_autoremove: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
