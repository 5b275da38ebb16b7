//! End-to-end bootstrap runs against real and in-memory filesystems.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use boilerplate_adapters::{GitCli, LocalFilesystem, MemoryFilesystem};
use boilerplate_core::{
    application::{ApplicationError, BootstrapService, HistoryReset, ports::VersionControl},
    domain::{DomainError, TemplateIdentity},
    error::{BoilerplateError, BoilerplateResult},
};

/// Records calls and fakes a repository by creating `.git/HEAD`.
#[derive(Clone, Default)]
struct FakeVcs {
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeVcs {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl VersionControl for FakeVcs {
    fn init_with_branch(&self, root: &Path, branch: &str) -> BoilerplateResult<()> {
        self.calls.lock().unwrap().push(format!("init -b {branch}"));
        let git = root.join(".git");
        fs::create_dir_all(&git).unwrap();
        fs::write(git.join("HEAD"), format!("ref: refs/heads/{branch}\n")).unwrap();
        Ok(())
    }

    fn init(&self, _root: &Path) -> BoilerplateResult<()> {
        self.calls.lock().unwrap().push("init".into());
        Ok(())
    }

    fn rename_branch(&self, _root: &Path, branch: &str) -> BoilerplateResult<()> {
        self.calls.lock().unwrap().push(format!("branch -M {branch}"));
        Ok(())
    }
}

fn identity() -> TemplateIdentity {
    TemplateIdentity::new("old_pkg", "old-pkg")
}

fn seed(root: &Path) {
    fs::create_dir_all(root.join("src/old_pkg")).unwrap();
    fs::write(root.join("src/old_pkg/__init__.py"), "name = 'old_pkg'").unwrap();
    fs::write(root.join("README.md"), "Install old-pkg now").unwrap();
}

fn local_service(vcs: FakeVcs) -> BootstrapService {
    BootstrapService::new(Box::new(LocalFilesystem::new()), Box::new(vcs)).with_template(identity())
}

fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out: Vec<_> = walk(root)
        .into_iter()
        .map(|p| {
            let bytes = fs::read(&p).unwrap();
            (p.strip_prefix(root).unwrap().to_path_buf(), bytes)
        })
        .collect();
    out.sort();
    out
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}

// ── Scenarios on disk ─────────────────────────────────────────────────────────

#[test]
fn renames_package_and_rewrites_both_forms() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);

    let vcs = FakeVcs::default();
    let service = local_service(vcs.clone());
    let name = service.validate("new_pkg").unwrap();
    let report = service.bootstrap(root, &name).unwrap();

    assert!(!root.join("src/old_pkg").exists());
    assert_eq!(
        fs::read_to_string(root.join("src/new_pkg/__init__.py")).unwrap(),
        "name = 'new_pkg'"
    );
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "Install new-pkg now"
    );
    assert_eq!(report.package_dir, root.join("src/new_pkg"));
    assert_eq!(report.rewrite.files_rewritten, 2);
    assert_eq!(report.history, HistoryReset::Direct);
    assert_eq!(vcs.calls(), vec!["init -b main"]);
}

#[test]
fn renamed_directory_keeps_every_file() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    fs::create_dir_all(root.join("src/old_pkg/nested")).unwrap();
    fs::write(root.join("src/old_pkg/nested/data.json"), "{}").unwrap();
    fs::write(root.join("src/old_pkg/icon.bin"), [0xc3u8, 0x28]).unwrap();
    // Only the file that mentions the old name may change.
    let expected: Vec<_> = snapshot(&root.join("src/old_pkg"))
        .into_iter()
        .map(|(p, bytes)| {
            if p == Path::new("__init__.py") {
                (p, b"name = 'new_pkg'".to_vec())
            } else {
                (p, bytes)
            }
        })
        .collect();

    let service = local_service(FakeVcs::default());
    let name = service.validate("new_pkg").unwrap();
    service.bootstrap(root, &name).unwrap();

    assert_eq!(snapshot(&root.join("src/new_pkg")), expected);
}

#[test]
fn binary_files_are_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    // Invalid UTF-8 that still contains the old identifier bytes.
    let mut blob = vec![0xffu8, 0xfe];
    blob.extend_from_slice(b"old_pkg");
    fs::write(root.join("asset.dat"), &blob).unwrap();

    let service = local_service(FakeVcs::default());
    let name = service.validate("new_pkg").unwrap();
    let report = service.bootstrap(root, &name).unwrap();

    assert_eq!(fs::read(root.join("asset.dat")).unwrap(), blob);
    assert_eq!(report.rewrite.binary_skipped, 1);
}

#[test]
fn skipped_directories_are_left_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    fs::create_dir_all(root.join(".venv/lib")).unwrap();
    fs::write(root.join(".venv/lib/site.py"), "import old_pkg").unwrap();
    fs::create_dir_all(root.join("src/old_pkg/__pycache__")).unwrap();
    fs::write(root.join("src/old_pkg/__pycache__/cache.txt"), "old_pkg").unwrap();

    let service = local_service(FakeVcs::default());
    let name = service.validate("new_pkg").unwrap();
    service.bootstrap(root, &name).unwrap();

    assert_eq!(
        fs::read_to_string(root.join(".venv/lib/site.py")).unwrap(),
        "import old_pkg"
    );
    assert_eq!(
        fs::read_to_string(root.join("src/new_pkg/__pycache__/cache.txt")).unwrap(),
        "old_pkg"
    );
}

#[test]
fn existing_history_is_replaced() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    fs::create_dir_all(root.join(".git/refs/heads")).unwrap();
    fs::write(root.join(".git/refs/heads/develop"), "deadbeef").unwrap();
    fs::write(root.join(".git/config"), "old_pkg").unwrap();

    let service = local_service(FakeVcs::default());
    let name = service.validate("new_pkg").unwrap();
    service.bootstrap(root, &name).unwrap();

    assert!(!root.join(".git/refs/heads/develop").exists());
    assert!(!root.join(".git/config").exists());
    assert_eq!(
        fs::read_to_string(root.join(".git/HEAD")).unwrap(),
        "ref: refs/heads/main\n"
    );
}

#[test]
fn same_name_is_rejected_and_tree_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    let before = snapshot(root);

    let service = local_service(FakeVcs::default());
    let err = service.validate("old_pkg").unwrap_err();

    assert!(matches!(
        err,
        BoilerplateError::Domain(DomainError::SameAsTemplate { .. })
    ));
    assert_eq!(snapshot(root), before);
}

#[test]
fn missing_package_fails_before_rewrite_or_reset() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("README.md"), "Install old-pkg now").unwrap();

    let vcs = FakeVcs::default();
    let service = local_service(vcs.clone());
    let name = service.validate("new_pkg").unwrap();
    let err = service.bootstrap(root, &name).unwrap_err();

    assert!(matches!(
        err,
        BoilerplateError::Application(ApplicationError::PackageNotFound { .. })
    ));
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "Install old-pkg now"
    );
    assert!(vcs.calls().is_empty());
}

#[test]
fn taken_destination_leaves_old_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    fs::create_dir_all(root.join("src/new_pkg")).unwrap();

    let service = local_service(FakeVcs::default());
    let name = service.validate("new_pkg").unwrap();
    let err = service.bootstrap(root, &name).unwrap_err();

    assert!(matches!(
        err,
        BoilerplateError::Application(ApplicationError::DestinationExists { .. })
    ));
    assert!(root.join("src/old_pkg/__init__.py").exists());
}

// ── In-memory ─────────────────────────────────────────────────────────────────

#[test]
fn untouched_files_are_never_written() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/src/old_pkg/__init__.py", "name = 'old_pkg'")
        .add_file("/p/LICENSE", "MIT")
        .add_file("/p/docs/guide.md", "nothing to rename");

    let service = BootstrapService::new(Box::new(fs.clone()), Box::new(FakeVcsInMemory))
        .with_template(identity());
    let name = service.validate("new_pkg").unwrap();
    service.bootstrap(Path::new("/p"), &name).unwrap();

    assert_eq!(fs.writes(), vec![PathBuf::from("/p/src/new_pkg/__init__.py")]);
    assert_eq!(
        fs.read_string("/p/src/new_pkg/__init__.py").as_deref(),
        Some("name = 'new_pkg'")
    );
}

struct FakeVcsInMemory;

impl VersionControl for FakeVcsInMemory {
    fn init_with_branch(&self, _root: &Path, _branch: &str) -> BoilerplateResult<()> {
        Ok(())
    }

    fn init(&self, _root: &Path) -> BoilerplateResult<()> {
        Ok(())
    }

    fn rename_branch(&self, _root: &Path, _branch: &str) -> BoilerplateResult<()> {
        Ok(())
    }
}

// ── Real git ──────────────────────────────────────────────────────────────────

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[test]
fn fresh_repository_starts_on_main() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    seed(root);
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/stale"), "old history").unwrap();

    let service = BootstrapService::new(Box::new(LocalFilesystem::new()), Box::new(GitCli::new()))
        .with_template(identity());
    let name = service.validate("new_pkg").unwrap();
    service.bootstrap(root, &name).unwrap();

    assert!(!root.join(".git/stale").exists());
    let head = Command::new("git")
        .args(["symbolic-ref", "--short", "HEAD"])
        .current_dir(root)
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&head.stdout).trim(), "main");
}
