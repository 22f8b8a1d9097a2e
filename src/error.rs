//! Centralized error handling for synabout

use std::fmt;
use std::io;

/// Custom error type for synabout operations
#[derive(Debug)]
pub enum AboutError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Configuration errors
    Config(String),
    /// System detection errors
    Detection(String),
}

impl fmt::Display for AboutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AboutError::Io(err) => write!(f, "I/O error: {}", err),
            AboutError::Config(msg) => write!(f, "Config error: {}", msg),
            AboutError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for AboutError {}

impl From<io::Error> for AboutError {
    fn from(error: io::Error) -> Self {
        AboutError::Io(error)
    }
}

/// Type alias for Results in synabout
pub type Result<T> = std::result::Result<T, AboutError>;
