//! `boilerplate config`: inspect configuration and write a default file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(config)?)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path();
            write_default(&path, force)?;
            info!(path = %path.display(), "Default configuration written");
            output.success(&format!("Created {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "env" => Ok(config.env.clone()),
        "debug" => Ok(config.debug.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "logging.json" => Ok(config.logging.json.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Internal {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write [`AppConfig::default`] to `path`, refusing to clobber unless `force`.
fn write_default(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigError {
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
            source: None,
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }

    let body = to_toml(&AppConfig::default())?;
    fs::write(path, body).with_cli_context(|| format!("writing {}", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
