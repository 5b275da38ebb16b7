//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `boilerplate-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::SkipSet;
use crate::error::BoilerplateResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `boilerplate_adapters::filesystem::LocalFilesystem` (production)
/// - `boilerplate_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `true` if `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// `true` if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Move `from` to `to` in a single rename, never copy-and-delete.
    fn rename(&self, from: &Path, to: &Path) -> BoilerplateResult<()>;

    /// Every regular file under `root`, at any depth.
    ///
    /// Directories named in `skip` are not descended into. Symbolic links
    /// are not followed and not reported.
    fn files_under(&self, root: &Path, skip: &SkipSet) -> BoilerplateResult<Vec<PathBuf>>;

    /// Read a file as UTF-8 text.
    ///
    /// `Ok(None)` means the file exists but is not valid text.
    fn read_text(&self, path: &Path) -> BoilerplateResult<Option<String>>;

    /// Replace a file's content.
    fn write_text(&self, path: &Path, content: &str) -> BoilerplateResult<()>;

    /// Remove a file, or a directory and all its contents.
    fn remove_all(&self, path: &Path) -> BoilerplateResult<()>;
}

/// Port for the version-control tool.
///
/// Implemented by:
/// - `boilerplate_adapters::vcs::GitCli` (runs the `git` executable)
///
/// Implementations must not let the tool's own output reach the user.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialise a repository at `root` whose primary branch is `branch`.
    fn init_with_branch(&self, root: &Path, branch: &str) -> BoilerplateResult<()>;

    /// Initialise a repository at `root` with the tool's default branch.
    fn init(&self, root: &Path) -> BoilerplateResult<()>;

    /// Force-rename the current branch at `root` to `branch`.
    fn rename_branch(&self, root: &Path, branch: &str) -> BoilerplateResult<()>;
}
