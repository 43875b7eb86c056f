//! Error handling for batch checking operations.
//!
//! This module defines a comprehensive error type that covers all the different
//! ways a batch check can fail, from invalid configuration to a predicate
//! blowing up mid-batch.

use std::fmt;

/// Main error type for batch checking operations.
///
/// This enum covers all possible failure modes in the checking process,
/// providing detailed context for debugging and user-friendly error messages.
#[derive(Debug, Clone)]
pub enum CheckError {
    /// Invalid checker configuration (e.g., zero workers)
    InvalidConfig {
        message: String,
    },

    /// A predicate invocation panicked; the whole batch is aborted
    PredicateFailure {
        message: String,
    },

    /// File I/O errors when reading URL lists
    FileError {
        path: String,
        message: String,
    },

    /// Configuration file errors (parse failures, invalid settings)
    ConfigError {
        message: String,
    },

    /// Generic internal errors that don't fit other categories
    Internal {
        message: String,
    },
}

impl CheckError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<M: Into<String>>(message: M) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new predicate failure error.
    pub fn predicate_failure<M: Into<String>>(message: M) -> Self {
        Self::PredicateFailure {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration file error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error means the caller's own predicate misbehaved,
    /// as opposed to a problem with inputs or configuration.
    pub fn is_predicate_failure(&self) -> bool {
        matches!(self, Self::PredicateFailure { .. })
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            Self::PredicateFailure { message } => {
                write!(f, "Predicate failed, batch aborted: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for CheckError {}

// Implement From conversions for common error types
impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
