// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Unifies failed, unspawnable, and timed-out runtime commands.

use crate::process::ProcessError;
use snafu::Snafu;
use std::time::Duration;

/// A runtime command did not complete successfully.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RuntimeError {
    #[snafu(display("{operation} failed (exit code {code:?}): {stderr}"))]
    CommandFailed {
        operation: String,
        code: Option<i32>,
        stderr: String,
    },

    #[snafu(display("{operation} could not be started: {source}"))]
    Spawn {
        operation: String,
        source: ProcessError,
    },

    #[snafu(display("{operation} timed out after {timeout:?}"))]
    TimedOut {
        operation: String,
        timeout: Duration,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// The runtime ran the command and reported failure.
    CommandFailed,
    /// The runtime binary could not be executed.
    Unavailable,
    /// The command did not finish in time.
    TimedOut,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::CommandFailed { .. } => RuntimeErrorKind::CommandFailed,
            RuntimeError::Spawn { .. } => RuntimeErrorKind::Unavailable,
            RuntimeError::TimedOut { .. } => RuntimeErrorKind::TimedOut,
        }
    }

    /// Returns the runtime's stderr if the command ran and failed.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            RuntimeError::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
