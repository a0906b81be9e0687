//! Command dispatch and handler modules.

mod cycles;
mod resolve;
mod unresolved;

use modsel_util::errors::ModselResult as Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            snapshot,
            config,
            jobs,
            output,
            quiet,
        } => resolve::exec(snapshot, config, jobs, output, quiet).await,
        Command::Cycles { snapshot } => cycles::exec(&snapshot),
        Command::Unresolved { snapshot } => unresolved::exec(&snapshot),
    }
}
