use std::fmt;
use thiserror::Error;

/// Boxed error type used to chain provider failures as a cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to tell a refused filesystem operation
/// apart from a misconfigured invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed
    Success = 0,
    /// The filesystem adapter reported a read, write or delete failure
    OperationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, local I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OperationFailed => write!(f, "Operation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors surfaced by the backup filesystem port.
///
/// Every provider failure is translated into exactly one of these kinds.
/// The message never repeats the provider's own message; the original
/// failure is only reachable through [`std::error::Error::source`].
///
/// A `source` of `None` on a write or delete failure means the provider
/// answered with an explicit `false` instead of failing.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("cant read file {path}")]
    ReadFailure {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("cant write file {path}")]
    WriteFailure {
        path: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("cant delete file {path}")]
    DeleteFailure {
        path: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl FilesystemError {
    /// The path the failed operation was called with
    pub fn path(&self) -> &str {
        match self {
            FilesystemError::ReadFailure { path, .. }
            | FilesystemError::WriteFailure { path, .. }
            | FilesystemError::DeleteFailure { path, .. } => path,
        }
    }

    /// Whether the provider failure was chained as a cause
    pub fn has_cause(&self) -> bool {
        match self {
            FilesystemError::ReadFailure { .. } => true,
            FilesystemError::WriteFailure { source, .. }
            | FilesystemError::DeleteFailure { source, .. } => source.is_some(),
        }
    }
}
