//! Application layer.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`BootstrapService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain rules against the ports. The
//! rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BootstrapReport, BootstrapService, HistoryReset, RewriteSummary};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, VersionControl};

pub use error::ApplicationError;
