//! Error types for the gesture media control library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hand observation does not carry a usable landmark set
    #[error("Malformed hand observation: {0}")]
    MalformedHand(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A recorded snapshot stream could not be decoded
    #[error("Recording error at line {line}: {message}")]
    Recording {
        /// One-based line number in the recording
        line: usize,
        /// Decoder message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
