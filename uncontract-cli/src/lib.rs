//! Uncontract CLI library
//!
//! This library provides the command-line interface for the uncontract
//! contraction expansion engine.

pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
