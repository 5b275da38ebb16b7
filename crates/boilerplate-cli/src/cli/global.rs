//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Shorthand for debug-level logging.
    #[arg(long = "debug", global = true, help = "Enable debug mode")]
    pub debug: bool,

    /// Emit log lines as JSON objects.
    #[arg(long = "json-logs", global = true, help = "Output logs in JSON")]
    pub json_logs: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set to any non-empty value
    /// (see <https://no-color.org>). Empty, `0` and `false` leave colour on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::{Arg, Command, CommandFactory, Parser};

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    /// Same flag definition with the env lookup swapped for a private
    /// variable, so the test does not depend on the caller's `NO_COLOR`.
    fn no_color_with_env(var: &'static str) -> Command {
        Harness::command().mut_arg("no_color", |a: Arg| a.env(var))
    }

    #[test]
    fn no_color_flag_parses() {
        let h = Harness::try_parse_from(["t", "--no-color"]).unwrap();
        assert!(h.global.no_color);
    }

    #[test]
    fn no_color_env_accepts_any_non_empty_value() {
        let var = "BOILERPLATE_TEST_NO_COLOR_ONE";
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(var, "1") };
        let m = no_color_with_env(var).try_get_matches_from(["t"]).unwrap();
        assert!(m.get_flag("no_color"));
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn no_color_env_empty_or_falsey_keeps_colour() {
        for (var, value) in [
            ("BOILERPLATE_TEST_NO_COLOR_EMPTY", ""),
            ("BOILERPLATE_TEST_NO_COLOR_ZERO", "0"),
        ] {
            // SAFETY: the variable names are unique to this test.
            unsafe { std::env::set_var(var, value) };
            let m = no_color_with_env(var).try_get_matches_from(["t"]).unwrap();
            assert!(!m.get_flag("no_color"));
            unsafe { std::env::remove_var(var) };
        }
    }
}
