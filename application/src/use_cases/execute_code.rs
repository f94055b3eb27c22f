//! Execute Code use case.
//!
//! Forwards an [`ExecutionRequest`] to the [`CodeExecutorPort`] under an
//! outer deadline. The executor enforces its own limit inside the
//! interpreter; this deadline only guarantees the caller is released even if
//! the executor does not return in time.

use crate::config::PipelineParams;
use crate::ports::code_executor::CodeExecutorPort;
use mentor_domain::{ExecutionError, ExecutionOutcome, ExecutionRequest};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for running a student's script.
#[derive(Clone)]
pub struct ExecuteCodeUseCase {
    executor: Arc<dyn CodeExecutorPort>,
    params: PipelineParams,
}

impl ExecuteCodeUseCase {
    pub fn new(executor: Arc<dyn CodeExecutorPort>, params: PipelineParams) -> Self {
        Self { executor, params }
    }

    /// Run the request and return its classified outcome.
    pub async fn execute(&self, request: &ExecutionRequest) -> ExecutionOutcome {
        let deadline = self.params.execution_deadline();
        let outcome = match tokio::time::timeout(deadline, self.executor.execute(request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    deadline_ms = deadline.as_millis() as u64,
                    "Executor did not return before the deadline"
                );
                ExecutionError::timeout(self.params.execution_timeout.as_millis()).into()
            }
        };
        match outcome.error_kind() {
            None => info!("Execution succeeded"),
            Some(kind) => info!(kind = %kind, "Execution failed"),
        }
        outcome
    }

    /// Run the source and render the result as the client-facing string.
    pub async fn execute_for_display(&self, source: impl Into<String>) -> String {
        self.execute(&ExecutionRequest::new(source))
            .await
            .display_text()
    }
}
