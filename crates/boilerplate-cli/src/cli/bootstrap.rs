//! Arguments for the `boilerplate-bootstrap` binary.
//!
//! A single positional name and the implicit `--help`. The name is only
//! checked for presence here; grammar validation happens in the core.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "boilerplate-bootstrap",
    bin_name = "boilerplate-bootstrap",
    about = "Rename the template package and reset repository history.",
    long_about = "Rename the template package and reset repository history.\n\n\
                  Run from the root of a fresh template checkout. Moves \
                  src/<template> to src/<NEW_PROJECT_NAME>, rewrites every text \
                  file that mentions the old names, deletes .git and initialises \
                  a new repository on 'main'.",
    disable_version_flag = true
)]
pub struct BootstrapCli {
    /// New package name (must be a valid identifier).
    #[arg(
        value_name = "NEW_PROJECT_NAME",
        help = "New package name (must be a valid identifier: letters, numbers, underscores)"
    )]
    pub new_project_name: String,
}
