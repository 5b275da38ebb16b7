// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the bootstrapper.
//!
//! Pure rules with no I/O: what a valid package name is, which names the
//! template ships with, which directories are off limits, and how file
//! contents are rewritten. Filesystem and git access happen behind the ports
//! in [`crate::application::ports`].

pub mod error;
pub mod identifier;
pub mod stage;
pub mod substitution;
pub mod template;

pub use error::{DomainError, ErrorCategory};
pub use identifier::PackageName;
pub use stage::Stage;
pub use substitution::Substitution;
pub use template::{
    PRIMARY_BRANCH, SOURCE_DIR, SkipSet, TEMPLATE_DISTRIBUTION, TEMPLATE_PACKAGE,
    TemplateIdentity, VCS_METADATA_DIR,
};
