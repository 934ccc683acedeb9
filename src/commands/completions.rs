//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Generate shell completions
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(
        shell,
        &mut cmd,
        "dnf-autoclean",
        &mut std::io::stdout().lock(),
    );
    Ok(())
}
