//! Execution requests and their classified outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of every failed execution's displayed result.
pub const EXECUTION_ERROR_PREFIX: &str = "Execution Error: ";

/// A snippet of untrusted source submitted for sandboxed execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    source: String,
}

impl ExecutionRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Classification of a failed execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionErrorKind {
    /// Source matched the static denylist and was never run
    RestrictedOperation,
    /// The script exceeded its wall-clock allowance
    Timeout,
    /// The script raised (or failed to compile) during evaluation
    RuntimeError,
    /// Anything else: worker panic, result that could not be shaped, ...
    UnexpectedInternalError,
}

impl ExecutionErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionErrorKind::RestrictedOperation => "restricted_operation",
            ExecutionErrorKind::Timeout => "timeout",
            ExecutionErrorKind::RuntimeError => "runtime_error",
            ExecutionErrorKind::UnexpectedInternalError => "unexpected_internal_error",
        }
    }
}

impl std::fmt::Display for ExecutionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed execution: what went wrong, and the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub message: String,
}

impl ExecutionError {
    pub fn new(kind: ExecutionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn restricted(token: &str) -> Self {
        Self::new(
            ExecutionErrorKind::RestrictedOperation,
            format!("Restricted operation detected: '{}' is not allowed", token),
        )
    }

    pub fn timeout(limit_ms: u128) -> Self {
        Self::new(
            ExecutionErrorKind::Timeout,
            format!("Script execution timed out after {} ms", limit_ms),
        )
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(ExecutionErrorKind::RuntimeError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ExecutionErrorKind::UnexpectedInternalError, message)
    }
}

/// Result of one sandboxed execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    /// The script completed; `output` is the rendered final value
    Success { output: String },
    /// The script was rejected or failed
    Failure(ExecutionError),
}

impl ExecutionOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        ExecutionOutcome::Success {
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success { .. })
    }

    /// The failure classification, if any
    pub fn error_kind(&self) -> Option<ExecutionErrorKind> {
        match self {
            ExecutionOutcome::Success { .. } => None,
            ExecutionOutcome::Failure(e) => Some(e.kind),
        }
    }

    /// The client-facing string: the rendered value, or
    /// `"Execution Error: <message>"`.
    pub fn display_text(&self) -> String {
        match self {
            ExecutionOutcome::Success { output } => output.clone(),
            ExecutionOutcome::Failure(e) => format!("{}{}", EXECUTION_ERROR_PREFIX, e.message),
        }
    }
}

impl From<ExecutionError> for ExecutionOutcome {
    fn from(error: ExecutionError) -> Self {
        ExecutionOutcome::Failure(error)
    }
}
