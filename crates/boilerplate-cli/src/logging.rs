//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `boilerplate-core`
//! and `boilerplate-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)            | Filter level |
//! |--------------------|--------------|
//! | (none)             | WARN         |
//! | `-v`               | INFO         |
//! | `-vv` / `--debug`  | DEBUG        |
//! | `-vvv`             | TRACE        |
//! | `--quiet`          | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

const CRATES: [&str; 5] = [
    "boilerplate",
    "boilerplate_bootstrap",
    "boilerplate_cli",
    "boilerplate_core",
    "boilerplate_adapters",
];

/// How the subscriber should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: &'static str,
    pub json: bool,
    pub no_color: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn",
            json: false,
            no_color: false,
        }
    }
}

impl LogSettings {
    /// Combine global flags with the loaded configuration.
    pub fn from_args(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            level: derive_level(args),
            json: args.json_logs || config.logging.json,
            no_color: args.no_color || config.output.no_color,
        }
    }
}

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
/// Returns an error if the subscriber could not be registered (e.g. it was
/// already set by a previous call in the same process).
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<()> {
    // RUST_LOG wins; otherwise build our own filter string so each crate gets
    // the same level as the top-level filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(settings.level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if settings.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        let use_ansi = !settings.no_color && std::io::stderr().is_terminal();
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn filter_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Translate the verbosity counter + quiet/debug flags to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match (args.verbose, args.debug) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    }
}
