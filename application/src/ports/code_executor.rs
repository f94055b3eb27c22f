//! Code executor port
//!
//! Defines the interface for the sandboxed script interpreter.

use async_trait::async_trait;
use mentor_domain::{ExecutionOutcome, ExecutionRequest};

/// Sandboxed execution of untrusted scripts
///
/// Every call must return, whatever the script does, and must not share
/// interpreter state with any other call. Failures are part of the
/// [`ExecutionOutcome`], not an `Err`.
#[async_trait]
pub trait CodeExecutorPort: Send + Sync {
    /// Run the request's source and classify the result
    async fn execute(&self, request: &ExecutionRequest) -> ExecutionOutcome;
}
