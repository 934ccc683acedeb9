//! Diagnostic logging setup using `tracing-subscriber`
//!
//! Diagnostics go to stderr so stdout stays clean for the plan, the health
//! report and `--json` output. The audit log is separate and lives in
//! [`crate::system::audit`].

use tracing_subscriber::EnvFilter;

/// Initialise stderr logging.
///
/// Controlled by `RUST_LOG`; defaults to `info` with `--verbose` and `warn`
/// otherwise.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
