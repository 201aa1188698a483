//! Error types for the JSON front-end.
//!
//! The aggregator itself is total and never fails; the only fallible surface
//! is parsing a JSON class expression.

use thiserror::Error;

/// Errors that can occur when aggregating a JSON class expression.
#[derive(Error, Debug)]
pub enum ClassError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout classname-core.
pub type Result<T> = std::result::Result<T, ClassError>;
