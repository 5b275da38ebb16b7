//! Application ports (traits) for external dependencies.
//!
//! Ports define what the bootstrap use case needs from the outside world.
//! Adapters in `boilerplate-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: tree walk, rename, text read/write, removal
//!   - `VersionControl`: repository initialisation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, VersionControl};

#[cfg(test)]
pub use output::{MockFilesystem, MockVersionControl};
