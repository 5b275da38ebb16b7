//! Application layer errors.
//!
//! These errors represent failures while carrying out the bootstrap, not
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during bootstrap orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The template package directory is missing.
    #[error("Expected {path} but it does not exist")]
    PackageNotFound { path: PathBuf },

    /// The rename destination is already taken.
    #[error("Destination {path} already exists")]
    DestinationExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A version-control command could not be run or exited non-zero.
    #[error("Version control command `{command}` failed: {reason}")]
    VersionControlFailed { command: String, reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PackageNotFound { path } => vec![
                format!("No package directory at {}", path.display()),
                "Run the bootstrapper from the root of an unmodified template".into(),
                "It may already have been renamed; check the src/ directory".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::VersionControlFailed { .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                "Run `git init` manually to see its output".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PackageNotFound { .. } => ErrorCategory::NotFound,
            Self::DestinationExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::VersionControlFailed { .. } => ErrorCategory::ExternalTool,
        }
    }
}
