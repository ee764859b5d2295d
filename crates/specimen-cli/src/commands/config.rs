//! `specimen config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            for (key, value) in config.entries() {
                output.status(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            output.data(&path.display().to_string())?;
            if !path.exists() {
                output.status(&output.dim("(not created; built-in defaults apply)"))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match config.get(key) {
        Some(value) if !value.is_object() => Ok(value.to_string()),
        Some(_) => Err(CliError::ConfigError {
            message: format!("'{key}' is a section; ask for one of its keys"),
            source: None,
        }),
        None => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
