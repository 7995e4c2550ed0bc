//! CLI command handlers for `registrar`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod admin;
pub mod config;
pub mod courses;
pub mod schedule;
