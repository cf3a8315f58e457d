//! Error types for Berth
//!
//! Uses `thiserror` for library errors. Absences on removal and query paths
//! are not errors here: they are logged and reported as success.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Berth operations
pub type BerthResult<T> = Result<T, BerthError>;

/// Main error type for Berth operations
#[derive(Error, Debug)]
pub enum BerthError {
    /// Empty command, empty required argument, or input that cannot be used
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A directory the caller relies on does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// External command failed while the caller asked for strict handling
    #[error("command `{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Invalid regular expression handed to a text utility
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Archive could not be written or read
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BerthError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<dialoguer::Error> for BerthError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
