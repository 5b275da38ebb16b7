// ============================================================================
// domain/error.rs - VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("'{name}' is not a valid identifier (letters, numbers, underscores)")]
    InvalidIdentifier { name: String },

    #[error("'{name}' must be different from the template package ({template})")]
    SameAsTemplate { name: String, template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { name } => {
                let mut hints = vec![
                    "Start with a letter or underscore".into(),
                    "Use only ASCII letters, digits, and underscores".into(),
                ];
                if name.contains('-') {
                    hints.push(format!("Try: {}", name.replace('-', "_")));
                } else {
                    hints.push("Examples: my_project, app2, _internal".into());
                }
                hints
            }
            Self::SameAsTemplate { template, .. } => vec![
                format!("The template package is already named '{template}'"),
                "Choose the name your new project should have".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::SameAsTemplate { .. } => ErrorCategory::Usage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
}
