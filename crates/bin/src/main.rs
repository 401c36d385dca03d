use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::CommandError;

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with printed values
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mappath=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.output.into();

    let result = match &cli.command {
        Commands::Get(args) => commands::get::run(args, format),
        Commands::Has(args) => commands::has::run(args, format),
        Commands::Children(args) => commands::children::run(args, format),
    };

    match result {
        Ok(code) => code,
        Err(CommandError::Usage(message)) => {
            Cli::command().error(ErrorKind::InvalidValue, message).exit()
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error[{}]: {err}", err.kind());
            ExitCode::FAILURE
        }
    }
}
