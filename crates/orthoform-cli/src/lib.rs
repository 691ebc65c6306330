//! orthoform-cli library root.
//!
//! Exposes the config, host and command modules so integration tests can
//! drive them without going through argument parsing.

pub mod commands;
pub mod config;
pub mod host;
