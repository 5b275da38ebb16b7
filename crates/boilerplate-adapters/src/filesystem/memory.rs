//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use boilerplate_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::SkipSet,
    error::BoilerplateResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Every `write_text` call is recorded in [`MemoryFilesystem::writes`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_parents(&mut self, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.directories.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with raw content, creating parents (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> &Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.into());
            inner.add_parents(path);
        }
        self
    }

    /// Read a file's raw content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Read a file as UTF-8 (testing helper).
    pub fn read_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_file(path).and_then(|b| String::from_utf8(b).ok())
    }

    /// Paths passed to `write_text`, in call order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> BoilerplateResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write(&self) -> BoilerplateResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> BoilerplateResult<()> {
        let mut inner = self.write()?;

        if !inner.files.contains_key(from) && !inner.directories.contains(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into());
        }

        let moved = |p: &Path| p.strip_prefix(from).ok().map(|rest| to.join(rest));

        let files: Vec<_> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in files {
            if let (Some(content), Some(new)) = (inner.files.remove(&old), moved(&old)) {
                inner.files.insert(new, content);
            }
        }

        let dirs: Vec<_> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in dirs {
            inner.directories.remove(&old);
            if let Some(new) = moved(&old) {
                inner.directories.insert(new);
            }
        }

        inner.add_parents(to);
        Ok(())
    }

    fn files_under(&self, root: &Path, skip: &SkipSet) -> BoilerplateResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter(|p| {
                p.strip_prefix(root)
                    .is_ok_and(|rel| !rel.as_os_str().is_empty() && !skip.excludes(rel))
            })
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> BoilerplateResult<Option<String>> {
        let inner = self.read()?;
        let bytes = inner
            .files
            .get(path)
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            })?;
        Ok(String::from_utf8(bytes.clone()).ok())
    }

    fn write_text(&self, path: &Path, content: &str) -> BoilerplateResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
        inner.writes.push(path.to_path_buf());
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> BoilerplateResult<()> {
        let mut inner = self.write()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}
