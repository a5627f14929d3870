use std::io;
use std::process::ExitStatus;
use thiserror::Error;

use crate::platform::{Operation, PlatformId};

/// Custom error type for netutils
#[derive(Error, Debug)]
pub enum NetUtilsError {
    #[error("{0}")]
    Validation(String),

    #[error("{operation} is not available for {platform}")]
    Unsupported {
        platform: PlatformId,
        operation: Operation,
    },

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Host lookup failed: {0}")]
    Host(String),

    #[error("'{program}' output had no lines starting with {expected}")]
    NoMatchingOutput { program: String, expected: String },
}

/// Failure to run an external diagnostic program.
///
/// Every variant names the program so the message is useful on its own.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("'{program}' was not found on PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to launch '{program}'")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Status {
        program: String,
        status: ExitStatus,
        output: String,
    },
}

impl ExecutionError {
    pub fn program(&self) -> &str {
        match self {
            ExecutionError::NotFound { program, .. }
            | ExecutionError::Launch { program, .. }
            | ExecutionError::Status { program, .. } => program,
        }
    }

    /// Combined output captured before the failure, if the process ran at all
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecutionError::Status { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }
}

/// Result type alias for netutils
pub type Result<T> = std::result::Result<T, NetUtilsError>;

impl NetUtilsError {
    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        NetUtilsError::Validation(msg.into())
    }

    pub fn host<S: Into<String>>(msg: S) -> Self {
        NetUtilsError::Host(msg.into())
    }

    pub fn unsupported(platform: PlatformId, operation: Operation) -> Self {
        NetUtilsError::Unsupported {
            platform,
            operation,
        }
    }

    /// Partial output carried by an execution failure
    pub fn partial_output(&self) -> Option<&str> {
        match self {
            NetUtilsError::Execution(e) => e.output(),
            _ => None,
        }
    }
}
