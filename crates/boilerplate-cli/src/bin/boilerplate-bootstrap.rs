//! # boilerplate-bootstrap
//!
//! One-shot rename of a fresh template checkout, run from its root.
//!
//! ```text
//! boilerplate-bootstrap my_project
//! ```
//!
//! Exit codes follow the `boilerplate` binary: 2 for a bad name or an
//! existing destination, 3 when the template package is missing and 1 for
//! filesystem or `git` failures.

use std::process::ExitCode;

use clap::Parser;

use boilerplate_cli::{
    cli::BootstrapCli,
    commands::bootstrap,
    error::{CliError, IntoCli},
    logging::{LogSettings, init_logging},
    output::OutputManager,
};

fn main() -> ExitCode {
    let args = match BootstrapCli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            return ExitCode::from(u8::try_from(code).unwrap_or(2));
        }
    };

    // Quiet by default; RUST_LOG opts into diagnostics.
    if let Err(e) = init_logging(&LogSettings::default()) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let root = match std::env::current_dir().with_cli_context(|| "Cannot determine project root") {
        Ok(root) => root,
        Err(e) => return e.report(false, false),
    };

    let output = OutputManager::detect();
    let service = bootstrap::default_service();

    match bootstrap::execute(args, &root, &service, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => CliError::report(e, false, !output.supports_color()),
    }
}
