//! Command handlers.
//!
//! Each handler takes already-parsed arguments plus whatever it needs from
//! startup (config, output) and returns a [`crate::error::CliResult`].

pub mod bootstrap;
pub mod completions;
pub mod config;
pub mod health;
pub mod hello;
