//! Domain-specific error types for voces-calma

use thiserror::Error;

/// Error type for the fallible edges of the crate.
///
/// The emotion engine itself never fails; these variants cover configuration,
/// story validation and CLI input handling.
#[derive(Error, Debug)]
pub enum CalmaError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("CSV error: {message}")]
    Csv { message: String },
}

impl From<std::io::Error> for CalmaError {
    fn from(err: std::io::Error) -> Self {
        CalmaError::Io {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for CalmaError {
    fn from(err: csv::Error) -> Self {
        CalmaError::Csv {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CalmaError {
    fn from(err: toml::de::Error) -> Self {
        CalmaError::Config {
            message: format!("TOML parsing error: {}", err),
        }
    }
}

/// Result type alias for voces-calma operations
pub type Result<T> = std::result::Result<T, CalmaError>;
