//! Entry point for the `hunkrev` CLI. Parses arguments, dispatches to the
//! command handler, and maps errors to exit codes.

use hunkrev::cli::Cli;
use hunkrev::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
