use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    // No subcommand: launch the interactive tour. The default invocation
    // consumes no arguments at all.
    let Some(command) = cli.command else {
        return handlers::tour::handle();
    };

    match command {
        Commands::Epochs { format } => handlers::epochs::handle(format),
    }
}
