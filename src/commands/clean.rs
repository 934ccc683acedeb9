//! Clean command implementation
//!
//! Wires the real collaborators (rpm/dnf, the audit log file, notify-send,
//! the console) into [`CleanOperation`].

use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::operations::CleanOperation;
use crate::system::{Dnf, FileAuditLog, Notifier, NotifySend, Silent};
use crate::ui::{ConsoleReporter, Reporter};

/// Run the clean workflow
pub fn run(settings: &Settings) -> Result<()> {
    let manager = Dnf::from_settings(settings);
    let audit = FileAuditLog::new(&settings.log_path);
    let reporter = ConsoleReporter::new(settings.verbose, settings.json);

    let notify_send;
    let notifier: &dyn Notifier = if settings.notify {
        notify_send = NotifySend::new(&settings.notify_command);
        &notify_send
    } else {
        &Silent
    };

    debug!(
        keep = settings.keep,
        dry_run = settings.dry_run,
        force = settings.force,
        log = %audit.path().display(),
        "starting clean"
    );

    let outcome = CleanOperation::new(settings, &manager, &audit, notifier, &reporter).execute()?;
    reporter.outcome(&outcome)
}
