//! # boilerplate
//!
//! Application entrypoint shipped with the template.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` into the environment (if present).
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Load configuration (file + env + defaults).
//! 4. Initialise the tracing subscriber (logging).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use boilerplate_cli::{
    cli::{Cli, Commands},
    commands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::{LogSettings, init_logging},
    output::OutputManager,
};

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use real environment variables.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and must exit 0.
            let code = e.exit_code();
            let _ = e.print();
            return ExitCode::from(u8::try_from(code).unwrap_or(2));
        }
    };

    let verbose = cli.global.verbose > 0 || cli.global.debug;
    let no_color = cli.global.no_color;

    // ── 2. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref())
        .with_cli_context(|| "Failed to load configuration")
    {
        Ok(cfg) => cfg,
        Err(e) => return e.report(verbose, no_color),
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&LogSettings::from_args(&cli.global, &config)) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        env = %config.env,
        "CLI started"
    );

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, &config, &output) {
        Ok(()) => {
            info!("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => CliError::report(e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Hello(args) => commands::hello::execute(args, output),
        Commands::Health => commands::health::execute(config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
