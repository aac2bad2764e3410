//! Ictus CLI library
//!
//! This library provides the command-line interface for ictus, which carries
//! stress marks from a macron-marked reference text onto plain verse.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod profile_source;
pub mod progress;

pub use error::{CliError, CliResult};
