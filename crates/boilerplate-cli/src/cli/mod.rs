//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod bootstrap;
pub mod global;
pub use bootstrap::BootstrapCli;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "boilerplate",
    bin_name = "boilerplate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "CLI entrypoint for the boilerplate project.",
    after_help = "EXAMPLES:\n\
        \x20 boilerplate hello\n\
        \x20 boilerplate --json-logs health\n\
        \x20 boilerplate config list\n\
        \x20 boilerplate completions bash > ~/.local/share/bash-completion/completions/boilerplate",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a greeting.
    #[command(about = "Greet someone")]
    Hello(HelloArgs),

    /// Print the service health report as JSON.
    #[command(
        about = "Report service health",
        after_help = "EXAMPLES:\n\
            \x20 boilerplate health\n\
            \x20 BOILERPLATE_ENV=production boilerplate health"
    )]
    Health,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 boilerplate completions bash > ~/.local/share/bash-completion/completions/boilerplate\n\
            \x20 boilerplate completions zsh  > ~/.zfunc/_boilerplate\n\
            \x20 boilerplate completions fish > ~/.config/fish/completions/boilerplate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 boilerplate config get env\n\
            \x20 boilerplate config list\n\
            \x20 boilerplate config init --force"
    )]
    Config(ConfigCommands),
}

// ── hello ─────────────────────────────────────────────────────────────────────

/// Arguments for `boilerplate hello`.
#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Name to greet.
    #[arg(value_name = "NAME", default_value = "world", help = "Name to greet")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `boilerplate completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `boilerplate config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `logging.json`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check
        Cli::command().debug_assert();
    }

    #[test]
    fn hello_defaults_to_world() {
        let cli = Cli::parse_from(["boilerplate", "hello"]);
        match cli.command {
            Commands::Hello(args) => assert_eq!(args.name, "world"),
            other => panic!("expected Hello, got {other:?}"),
        }
    }

    #[test]
    fn hello_takes_a_name() {
        let cli = Cli::parse_from(["boilerplate", "hello", "Ada"]);
        match cli.command {
            Commands::Hello(args) => assert_eq!(args.name, "Ada"),
            other => panic!("expected Hello, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["boilerplate", "health", "--debug", "--json-logs"]);
        assert!(cli.global.debug);
        assert!(cli.global.json_logs);
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::parse_from(["boilerplate", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["boilerplate", "--quiet", "--verbose", "health"]);
        assert!(result.is_err());
    }
}
