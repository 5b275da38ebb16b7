//! `boilerplate-bootstrap <NEW_PROJECT_NAME>` handler.

use std::path::Path;

use boilerplate_adapters::{GitCli, LocalFilesystem};
use boilerplate_core::application::BootstrapService;
use tracing::{debug, instrument};

use crate::{cli::BootstrapCli, error::CliResult, output::OutputManager};

/// Build the service against the real filesystem and `git`.
pub fn default_service() -> BootstrapService {
    BootstrapService::new(Box::new(LocalFilesystem::new()), Box::new(GitCli::new()))
}

/// Rename the template checkout at `root`.
///
/// The name is validated before anything is printed or touched, so a bad
/// name leaves no trace beyond the error report.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn execute(
    args: BootstrapCli,
    root: &Path,
    service: &BootstrapService,
    output: &OutputManager,
) -> CliResult<()> {
    let name = service.validate(&args.new_project_name)?;

    output.header(&format!("Preparing new project: {name}"))?;

    let report = service.bootstrap(root, &name)?;
    debug!(
        package_dir = %report.package_dir.display(),
        rewritten = report.rewrite.files_rewritten,
        scanned = report.rewrite.files_scanned,
        binary = report.rewrite.binary_skipped,
        history = ?report.history,
        "Bootstrap report"
    );

    output.success(&format!("Project successfully renamed to {name}."))?;
    output.info("Next steps: uv sync && git add .")?;
    Ok(())
}
