//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use boilerplate_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::SkipSet,
    error::{BoilerplateError, BoilerplateResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as taken.
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> BoilerplateResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    fn files_under(&self, root: &Path, skip: &SkipSet) -> BoilerplateResult<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !skip.contains(name))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable directories are left out, the rest of the tree is still walked.
                Err(e) if is_permission_denied(&e) => {
                    let path = e.path().unwrap_or(root);
                    warn!(path = %path.display(), "Skipping unreadable directory");
                    continue;
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    return Err(BoilerplateError::from(ApplicationError::FilesystemError {
                        path,
                        reason: format!("Failed to walk directory: {e}"),
                    }));
                }
            };

            // Skip directories, symlinks and other special types.
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        trace!(root = %root.display(), count = files.len(), "Walked tree");
        Ok(files)
    }

    fn read_text(&self, path: &Path) -> BoilerplateResult<Option<String>> {
        let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;
        Ok(String::from_utf8(bytes).ok())
    }

    fn write_text(&self, path: &Path, content: &str) -> BoilerplateResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_all(&self, path: &Path) -> BoilerplateResult<()> {
        let result = if path.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        result.map_err(|e| map_io_error(path, e, "remove"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BoilerplateError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|inner| inner.kind() == io::ErrorKind::PermissionDenied)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn files_under_prunes_skipped_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src/pkg/__pycache__")).unwrap();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join("README.md"), "hi").unwrap();
        fs::write(root.join(".gitignore"), "target").unwrap();
        fs::write(root.join("src/pkg/__init__.py"), "").unwrap();
        fs::write(root.join("src/pkg/__pycache__/x.pyc"), [0u8, 1]).unwrap();
        fs::write(root.join(".git/config"), "[core]").unwrap();

        let mut files = LocalFilesystem::new()
            .files_under(root, &SkipSet::default())
            .unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                root.join(".gitignore"),
                root.join("README.md"),
                root.join("src/pkg/__init__.py"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn files_under_skips_unreadable_directories() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        let locked = root.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "x").unwrap();
        fs::write(root.join("README.md"), "hi").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read it anyway; nothing to check then.
        let readable = fs::read_dir(&locked).is_ok();
        let result = LocalFilesystem::new().files_under(root, &SkipSet::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        assert_eq!(result.unwrap(), vec![root.join("README.md")]);
    }

    #[test]
    fn read_text_returns_none_for_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logo.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        assert_eq!(LocalFilesystem::new().read_text(&path).unwrap(), None);
    }

    #[test]
    fn read_text_returns_utf8_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notes.md");
        fs::write(&path, "caf\u{e9}").unwrap();

        assert_eq!(
            LocalFilesystem::new().read_text(&path).unwrap().as_deref(),
            Some("caf\u{e9}")
        );
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(
            LocalFilesystem::new()
                .read_text(&tmp.path().join("nope"))
                .is_err()
        );
    }

    #[test]
    fn rename_moves_directory_with_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("old");
        let to = tmp.path().join("new");
        fs::create_dir_all(from.join("sub")).unwrap();
        fs::write(from.join("sub/a.txt"), "a").unwrap();

        LocalFilesystem::new().rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(to.join("sub/a.txt")).unwrap(), "a");
    }

    #[test]
    fn remove_all_handles_files_and_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(".git");
        let file = tmp.path().join("gitlink");
        fs::create_dir_all(dir.join("refs")).unwrap();
        fs::write(&file, "gitdir: elsewhere").unwrap();

        let local = LocalFilesystem::new();
        local.remove_all(&dir).unwrap();
        local.remove_all(&file).unwrap();

        assert!(!local.exists(&dir));
        assert!(!local.exists(&file));
    }
}
