//! Text rendering for plans, outcomes and health reports
//!
//! Functions here return the text instead of printing it so callers decide
//! where it goes.

use console::Style;

use crate::domain::{KernelVersion, RemovalPlan, RunningKernel};
use crate::operations::{CleanOutcome, HealthReport};

/// Keep/remove lists shown with `--verbose`
pub fn render_decision(running: &RunningKernel, plan: &RemovalPlan) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", bold.apply_to("Running kernel:"), running));
    out.push_str(&format!(
        "{}\n",
        bold.apply_to(format!("Keeping {} kernel version(s):", plan.keep().len()))
    ));
    push_versions(&mut out, plan.keep(), plan.running());

    out.push_str(&format!(
        "{}\n",
        bold.apply_to(format!("Removal candidates ({}):", plan.remove().len()))
    ));
    if plan.remove().is_empty() {
        out.push_str("  (none)\n");
    } else {
        push_versions(&mut out, plan.remove(), plan.running());
    }
    out
}

/// Packages held back and packages about to be removed
pub fn render_plan(plan: &RemovalPlan) -> String {
    let mut out = String::new();

    if !plan.blocked().is_empty() {
        out.push_str(&format!(
            "{}\n",
            Style::new().yellow().bold().apply_to(format!(
                "Skipping {} package(s):",
                plan.blocked().len()
            ))
        ));
        for (name, reason) in plan.blocked() {
            out.push_str(&format!("  - {name} ({reason})\n"));
        }
    }

    if plan.packages().is_empty() {
        return out;
    }

    let header = if plan.dry_run() {
        format!("[DRY RUN] Would remove {} package(s):", plan.packages().len())
    } else {
        format!("Removing {} package(s):", plan.packages().len())
    };
    out.push_str(&format!("{}\n", Style::new().bold().apply_to(header)));
    for name in plan.packages() {
        out.push_str(&format!("  - {name}\n"));
    }
    out
}

/// Final status line
pub fn render_outcome(outcome: &CleanOutcome) -> String {
    match outcome {
        CleanOutcome::NoKernelsInstalled => {
            "No kernel packages installed; nothing to remove.".to_string()
        }
        CleanOutcome::NothingToRemove(plan) => format!(
            "Nothing to remove: keeping {} kernel version(s).",
            plan.keep().len()
        ),
        CleanOutcome::DryRun(plan) => format!(
            "[DRY RUN] {} package(s) would be removed. Nothing was changed.",
            plan.packages().len()
        ),
        CleanOutcome::Removed(plan) => Style::new()
            .green()
            .apply_to(format!(
                "Successfully removed {} package(s).",
                plan.packages().len()
            ))
            .to_string(),
    }
}

/// Health report text
pub fn render_health(report: &HealthReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Running kernel: {}\n", report.running));
    out.push_str(&format!(
        "Installed kernel-core packages: {}\n",
        report.installed_core_count
    ));
    out.push_str(&format!(
        "Installed kernel versions: {}\n",
        report.distinct_versions
    ));
    if report.candidate_count > 0 {
        out.push_str(&format!(
            "You have {} candidate kernel(s) to remove\n",
            report.candidate_count
        ));
    } else {
        out.push_str("Kernel count within configured limit\n");
    }
    out
}

fn push_versions(out: &mut String, versions: &[KernelVersion], running: &KernelVersion) {
    for version in versions {
        if version == running {
            out.push_str(&format!("  - {version} (running)\n"));
        } else {
            out.push_str(&format!("  - {version}\n"));
        }
    }
}
