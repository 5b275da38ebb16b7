//! Git adapter that shells out to the `git` executable.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use boilerplate_core::{
    application::{ApplicationError, ports::VersionControl},
    error::BoilerplateResult,
};

/// Runs `git` as a subprocess with all of its stdio discarded.
///
/// Only the exit status is observed.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Use `git` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, root: &Path, args: &[&str]) -> BoilerplateResult<()> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, cwd = %root.display(), "Running");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::VersionControlFailed {
                command: command.clone(),
                reason: format!("failed to start: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::VersionControlFailed {
                command,
                reason: status.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn init_with_branch(&self, root: &Path, branch: &str) -> BoilerplateResult<()> {
        self.run(root, &["init", "-b", branch])
    }

    fn init(&self, root: &Path) -> BoilerplateResult<()> {
        self.run(root, &["init"])
    }

    fn rename_branch(&self, root: &Path, branch: &str) -> BoilerplateResult<()> {
        self.run(root, &["branch", "-M", branch])
    }
}
