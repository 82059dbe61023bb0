//! Error types for the CLI

use thiserror::Error;

use core_types::DeserializeError;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input could not be read
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a valid document
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),

    /// Value has no plain JSON form
    #[error("cannot convert to JSON: {0}")]
    Json(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
