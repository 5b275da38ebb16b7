//! Unified error handling for the bootstrapper core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoilerplateError {
    /// Errors from the domain layer (invalid names).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (preconditions and I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl BoilerplateError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Usage => ErrorCategory::Usage,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input; nothing was touched.
    Usage,
    /// An expected path is missing.
    NotFound,
    /// A path that must be free is taken.
    Conflict,
    /// The version-control tool failed.
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type BoilerplateResult<T> = Result<T, BoilerplateError>;
