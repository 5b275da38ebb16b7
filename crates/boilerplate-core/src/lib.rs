//! Boilerplate Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the template bootstrapper, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        boilerplate-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (BootstrapService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, VersionControl)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   boilerplate-adapters (Infrastructure) │
//! │   (LocalFilesystem, GitCli, etc)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PackageName, TemplateIdentity, SkipSet)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boilerplate_core::prelude::*;
//!
//! let service = BootstrapService::new(filesystem, vcs);
//! let name = service.validate("new_pkg")?;
//! service.bootstrap(Path::new("."), &name)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapReport, BootstrapService, HistoryReset,
        ports::{Filesystem, VersionControl},
    };
    pub use crate::domain::{PackageName, SkipSet, Stage, Substitution, TemplateIdentity};
    pub use crate::error::{BoilerplateError, BoilerplateResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
