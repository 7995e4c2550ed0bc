//! Shared library for `registrar`
//! Contains the record models, flat-file stores, and the schedule builder used by the CLI

pub mod core;

pub use crate::core::{config, get_version};
