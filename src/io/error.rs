//! Error types for input parsing and solver setup

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
///
/// The search itself never fails; a hand without a decomposition is a plain
/// `None`. Errors only arise while building inputs or setting up the process.
#[derive(Debug)]
pub enum SolverError {
    /// A tile token could not be parsed or lies outside the tile domain
    InvalidToken {
        /// The offending token text
        token: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Solver or driver parameter validation failed
    InvalidParameter {
        /// Parameter name as the driver or CLI knows it
        parameter: &'static str,
        /// Rejected value, rendered as text
        value: String,
        /// Accepted range or rule
        reason: String,
    },

    /// A puzzle description line could not be understood
    MalformedInput {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Reading a puzzle file failed
    FileSystem {
        /// File being accessed
        path: PathBuf,
        /// Short name of the failed step
        operation: &'static str,
        /// I/O error from the operating system
        source: std::io::Error,
    },

    /// Logger could not be installed
    Logging {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { token, reason } => {
                write!(f, "Invalid tile token '{token}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedInput { line, reason } => {
                write!(f, "Malformed input on line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { source } => write!(f, "Failed to initialize logging: {source}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for SolverError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Build an `InvalidParameter` error from displayable parts
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid token error
pub fn invalid_token(token: &impl ToString, reason: &'static str) -> SolverError {
    SolverError::InvalidToken {
        token: token.to_string(),
        reason,
    }
}
