//! Engine error types

use thiserror::Error;

/// Errors surfaced by the expansion engine
#[derive(Error, Debug)]
pub enum ExpandError {
    /// No sentence was provided
    #[error("No sentence provided.")]
    EmptyInput,

    /// A lexicon pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ExpandError>;
