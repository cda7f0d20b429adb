//! Error types for srclint.
//!
//! This module defines the error type for the srclint CLI tool, providing
//! specific variants for the failure modes the tool distinguishes when
//! choosing an exit code and message.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The main error type for srclint operations.
#[derive(Debug)]
pub enum SrclintError {
    /// An argument or input value was invalid.
    InvalidInput {
        /// Description of the invalid input.
        message: String,
        /// The argument or value that was invalid.
        argument: Option<String>,
    },

    /// An input spec named nothing that exists on disk.
    PathNotFound {
        /// The input spec as the user supplied it.
        input: String,
    },

    /// The external version-control query tool failed or was unreachable.
    VcsQueryFailed {
        /// The operation being performed, e.g. `svnlook changed`.
        operation: String,
        /// Detail from the failed invocation (stderr, spawn error).
        detail: String,
    },

    /// The external analysis engine could not be driven.
    EngineError {
        /// Description of what went wrong.
        message: String,
        /// The underlying error.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred during file system operations.
    IoError {
        /// The operation being performed.
        operation: String,
        /// The path involved in the error.
        path: Option<PathBuf>,
        /// The underlying IO error.
        source: Option<io::Error>,
    },
}

impl SrclintError {
    /// Creates a new `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            argument: None,
        }
    }

    /// Creates a new `InvalidInput` error naming the offending argument.
    pub fn invalid_input_with_argument(
        message: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            message: message.into(),
            argument: Some(argument.into()),
        }
    }

    /// Creates a new `PathNotFound` error for the given input spec.
    pub fn path_not_found(input: impl Into<String>) -> Self {
        Self::PathNotFound {
            input: input.into(),
        }
    }

    /// Creates a new `VcsQueryFailed` error.
    pub fn vcs_query_failed(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::VcsQueryFailed {
            operation: operation.into(),
            detail: detail.into(),
        }
    }

    /// Creates a new `EngineError` with the given message.
    pub fn engine_error(message: impl Into<String>) -> Self {
        Self::EngineError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new `EngineError` wrapping an underlying error.
    pub fn engine_error_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::EngineError {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates a new `IoError` with a path and underlying error.
    pub fn io_error_with_path(
        operation: impl Into<String>,
        path: PathBuf,
        source: io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path: Some(path),
            source: Some(source),
        }
    }
}

impl fmt::Display for SrclintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { message, argument } => {
                write!(f, "Invalid input: {message}")?;
                if let Some(argument) = argument {
                    write!(f, " (argument: {argument})")?;
                }
                Ok(())
            }
            Self::PathNotFound { input } => {
                write!(f, "Path not found: {input}")
            }
            Self::VcsQueryFailed { operation, detail } => {
                write!(f, "VCS query failed ({operation}): {detail}")
            }
            Self::EngineError { message, .. } => {
                write!(f, "Analysis engine error: {message}")
            }
            Self::IoError {
                operation, path, ..
            } => {
                write!(f, "IO error during {operation}")?;
                if let Some(path) = path {
                    write!(f, " at {}", path.display())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SrclintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EngineError {
                source: Some(source),
                ..
            } => Some(source.as_ref()),
            Self::IoError {
                source: Some(source),
                ..
            } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SrclintError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            operation: "file operation".to_string(),
            path: None,
            source: Some(err),
        }
    }
}

/// A convenience `Result` type alias using [`SrclintError`].
pub type Result<T> = std::result::Result<T, SrclintError>;
