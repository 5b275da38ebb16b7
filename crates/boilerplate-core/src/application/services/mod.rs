//! Application services - orchestrate use cases.

pub mod bootstrap_service;

pub use bootstrap_service::{BootstrapReport, BootstrapService, HistoryReset, RewriteSummary};
