//! # boilerplate-cli
//!
//! Shared plumbing for the two binaries in this crate:
//!
//! - `boilerplate-bootstrap` renames the template package and resets history.
//! - `boilerplate` is the application entrypoint the template ships with.
//!
//! Both parse their own arguments, initialise logging through
//! [`logging::init_logging`], and turn errors into exit codes with
//! [`error::CliError::report`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
