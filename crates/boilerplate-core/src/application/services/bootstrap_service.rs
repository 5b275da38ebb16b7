//! Bootstrap Service - main application orchestrator.
//!
//! This service runs the one-shot rename of a template checkout:
//! 1. Validate the new package name
//! 2. Rename `src/<template>` to `src/<new>`
//! 3. Rewrite the old names in every text file
//! 4. Discard version-control history and initialise a fresh repository
//!
//! Each step either completes or aborts the run. Completed steps are never
//! rolled back.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, VersionControl},
    },
    domain::{
        PRIMARY_BRANCH, PackageName, SkipSet, Stage, Substitution, TemplateIdentity,
        VCS_METADATA_DIR,
    },
    error::BoilerplateResult,
};

/// Which initialisation path the history reset took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryReset {
    /// The tool accepted the primary branch name at init time.
    Direct,
    /// Plain init followed by a branch rename.
    Fallback,
}

/// Counts from the content-rewrite step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub binary_skipped: usize,
}

/// Outcome of a completed bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub package_dir: PathBuf,
    pub rewrite: RewriteSummary,
    pub history: HistoryReset,
}

/// Main bootstrap service.
pub struct BootstrapService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    template: TemplateIdentity,
    skip: SkipSet,
}

impl BootstrapService {
    /// Create a service for the shipped template with the default skip set.
    pub fn new(filesystem: Box<dyn Filesystem>, vcs: Box<dyn VersionControl>) -> Self {
        Self {
            filesystem,
            vcs,
            template: TemplateIdentity::default(),
            skip: SkipSet::default(),
        }
    }

    /// Rename from a different template identity.
    pub fn with_template(mut self, template: TemplateIdentity) -> Self {
        self.template = template;
        self
    }

    /// Validate a raw user-supplied name. Touches nothing.
    pub fn validate(&self, raw: &str) -> BoilerplateResult<PackageName> {
        Ok(self.template.validate_new_name(raw)?)
    }

    /// Run the whole pipeline against the project at `root`.
    #[instrument(
        skip_all,
        fields(
            root = %root.display(),
            template = %self.template.identifier(),
            new_name = %new_name,
        )
    )]
    pub fn bootstrap(
        &self,
        root: &Path,
        new_name: &PackageName,
    ) -> BoilerplateResult<BootstrapReport> {
        self.template.ensure_distinct(new_name)?;
        debug!(stage = %Stage::Validated, "Name accepted");

        let package_dir = self.rename_package(root, new_name)?;
        debug!(stage = %Stage::DirectoryRenamed, path = %package_dir.display(), "Package moved");

        let rewrite = self.rewrite_contents(root, new_name)?;
        debug!(
            stage = %Stage::ContentsRewritten,
            scanned = rewrite.files_scanned,
            rewritten = rewrite.files_rewritten,
            binary = rewrite.binary_skipped,
            "Contents rewritten"
        );

        let history = self.reset_history(root)?;
        debug!(stage = %Stage::HistoryReset, ?history, "History reset");

        info!(stage = %Stage::Done, "Bootstrap completed");
        Ok(BootstrapReport {
            package_dir,
            rewrite,
            history,
        })
    }

    /// Move `src/<template>` to `src/<new_name>` and return the new path.
    pub fn rename_package(&self, root: &Path, new_name: &PackageName) -> BoilerplateResult<PathBuf> {
        let src_dir = self.template.package_dir(root);
        if !self.filesystem.is_dir(&src_dir) {
            return Err(ApplicationError::PackageNotFound { path: src_dir }.into());
        }

        let dest_dir = TemplateIdentity::derived(new_name).package_dir(root);
        if self.filesystem.exists(&dest_dir) {
            return Err(ApplicationError::DestinationExists { path: dest_dir }.into());
        }

        self.filesystem.rename(&src_dir, &dest_dir)?;
        Ok(dest_dir)
    }

    /// Replace the template's names in every text file under `root`.
    pub fn rewrite_contents(
        &self,
        root: &Path,
        new_name: &PackageName,
    ) -> BoilerplateResult<RewriteSummary> {
        let substitution = Substitution::for_rename(&self.template, new_name);
        let mut summary = RewriteSummary::default();

        for path in self.filesystem.files_under(root, &self.skip)? {
            let relative = path.strip_prefix(root).unwrap_or(path.as_path());
            if self.skip.excludes(relative) {
                continue;
            }
            summary.files_scanned += 1;

            let Some(content) = self.filesystem.read_text(&path)? else {
                trace!(path = %relative.display(), "Not text, left untouched");
                summary.binary_skipped += 1;
                continue;
            };

            if let Some(updated) = substitution.apply(&content) {
                self.filesystem.write_text(&path, &updated)?;
                trace!(path = %relative.display(), "Rewritten");
                summary.files_rewritten += 1;
            }
        }

        Ok(summary)
    }

    /// Delete any existing repository metadata and initialise a new
    /// repository on [`PRIMARY_BRANCH`].
    pub fn reset_history(&self, root: &Path) -> BoilerplateResult<HistoryReset> {
        let metadata = root.join(VCS_METADATA_DIR);
        if self.filesystem.exists(&metadata) {
            self.filesystem.remove_all(&metadata)?;
            debug!(path = %metadata.display(), "Existing history removed");
        }

        match self.vcs.init_with_branch(root, PRIMARY_BRANCH) {
            Ok(()) => Ok(HistoryReset::Direct),
            Err(e) => {
                debug!(error = %e, "Init with branch name failed, falling back");
                self.vcs.init(root)?;
                self.vcs.rename_branch(root, PRIMARY_BRANCH)?;
                Ok(HistoryReset::Fallback)
            }
        }
    }
}
