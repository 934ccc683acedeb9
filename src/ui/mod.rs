//! Presentation layer
//!
//! All user-facing output of a clean run goes through the [`Reporter`] trait,
//! allowing different implementations based on command-line flags
//! (`--verbose`, `--json`) and a silent one for tests.

pub mod display;

use crate::domain::{RemovalPlan, RunningKernel};
use crate::error::Result;
use crate::operations::CleanOutcome;

/// Reporter for the stages of a clean run
pub trait Reporter {
    /// Called once the plan is built, before anything is removed
    fn plan(&self, running: &RunningKernel, plan: &RemovalPlan);

    /// Called with the final outcome of a successful run
    fn outcome(&self, outcome: &CleanOutcome) -> Result<()>;
}

/// Reporter writing human text or JSON to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    verbose: bool,
    json: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }
}

impl Reporter for ConsoleReporter {
    fn plan(&self, running: &RunningKernel, plan: &RemovalPlan) {
        // JSON mode prints the whole plan once, with the outcome
        if self.json {
            return;
        }
        if self.verbose {
            print!("{}", display::render_decision(running, plan));
        }
        print!("{}", display::render_plan(plan));
    }

    fn outcome(&self, outcome: &CleanOutcome) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        } else {
            println!("{}", display::render_outcome(outcome));
        }
        Ok(())
    }
}

/// No-op reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn plan(&self, _running: &RunningKernel, _plan: &RemovalPlan) {
        // No-op for silent mode
    }

    fn outcome(&self, _outcome: &CleanOutcome) -> Result<()> {
        Ok(())
    }
}
