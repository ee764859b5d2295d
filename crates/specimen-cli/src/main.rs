//! `specimen`: print example JSON for types described in TOML/JSON manifests.
//!
//! Startup runs in a fixed order: `.env`, argument parsing, logging,
//! configuration, then the command. Failures map to exit codes:
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Type or field not found |
//! |  4   | Configuration error     |

use std::io::{self, IsTerminal as _};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here as well; they print to stdout.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("specimen: {e:#}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let stderr_color = !cli.global.no_color && io::stderr().is_terminal();

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return report(&err, verbose, stderr_color);
        }
    };
    debug!(?config, "configuration loaded");

    let output = OutputManager::new(&cli.global, &config);
    // From here on errors follow the output format: color only in `human`.
    let stderr_color = output.color() && io::stderr().is_terminal();

    match run(cli.command, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose, stderr_color),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Render(args) => commands::render::execute(args, config, output),
        Commands::Types(args) => commands::types::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

fn report(err: &CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.report(verbose, color));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_comes_from_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
