//! `boilerplate hello [NAME]`.

use crate::{cli::HelloArgs, error::CliResult, output::OutputManager};

pub fn execute(args: HelloArgs, output: &OutputManager) -> CliResult<()> {
    output.print(&greeting(&args.name))?;
    Ok(())
}

fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}
