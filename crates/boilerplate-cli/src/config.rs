//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it, and the bootstrapper
//! binary does not load it at all.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `BOILERPLATE_*` (`__` separates nested keys,
//!    e.g. `BOILERPLATE_LOGGING__JSON=true`); a `.env` file is loaded into
//!    the environment first by `main`
//! 3. Config file (`--config FILE`, else the platform default, if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BOILERPLATE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment name, reported by `health`.
    pub env: String,
    /// Debug mode flag.
    pub debug: bool,
    /// Output settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".into(),
            debug: true,
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is used if a file is there.
    /// Keys absent from every source fall back to [`AppConfig::default`].
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read configuration from {}: {e}", path.display()))?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.boilerplate.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "boilerplate", "boilerplate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".boilerplate.toml"))
    }
}
