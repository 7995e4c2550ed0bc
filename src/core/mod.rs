//! Core module for record storage and schedule building

pub mod admin;
pub mod config;
pub mod csv;
pub mod error;
pub mod models;
pub mod repository;
pub mod review;
pub mod schedule;
pub mod selector;
pub mod transcript_log;

/// Returns the current version of the `registrar` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
