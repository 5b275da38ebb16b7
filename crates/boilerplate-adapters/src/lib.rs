//! Infrastructure adapters for the boilerplate bootstrapper.
//!
//! This crate implements the ports defined in `boilerplate-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use vcs::GitCli;
