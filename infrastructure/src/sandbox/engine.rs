//! Lua execution adapter
//!
//! `LuaSandboxExecutor` implements `CodeExecutorPort` by running each script
//! in its own VM on the blocking pool. Nothing survives between requests.

use super::render::render_value;
use super::vm::{create_sandboxed_vm, install_deadline};
use async_trait::async_trait;
use mentor_application::CodeExecutorPort;
use mentor_domain::{ExecutionError, ExecutionOutcome, ExecutionRequest, find_restricted_token};
use mlua::prelude::*;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Resource limits applied to every script.
#[derive(Debug, Clone)]
pub struct SandboxLimits {
    /// Wall-clock budget enforced inside the interpreter.
    pub timeout: Duration,
    /// Maximum bytes the VM may allocate.
    pub memory_limit: usize,
    /// How many VM instructions run between deadline checks.
    pub instruction_interval: u32,
}

impl Default for SandboxLimits {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            memory_limit: 16 * 1024 * 1024,
            instruction_interval: 1000,
        }
    }
}

impl SandboxLimits {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit = bytes;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct LuaSandboxExecutor {
    limits: SandboxLimits,
}

impl LuaSandboxExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SandboxLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SandboxLimits {
        &self.limits
    }
}

/// Run one script to completion on the current thread.
fn run_script(source: &str, limits: &SandboxLimits) -> ExecutionOutcome {
    let lua = match create_sandboxed_vm(limits.memory_limit) {
        Ok(lua) => lua,
        Err(e) => return ExecutionError::internal(format!("sandbox setup failed: {}", e)).into(),
    };
    let timed_out = install_deadline(
        &lua,
        Instant::now() + limits.timeout,
        limits.instruction_interval,
    );

    let result = lua
        .load(source)
        .set_name("script")
        .eval::<LuaValue>()
        .and_then(|value| render_value(&lua, value));

    match result {
        Ok(output) => ExecutionOutcome::success(output),
        Err(_) if timed_out.load(Ordering::SeqCst) => {
            ExecutionError::timeout(limits.timeout.as_millis()).into()
        }
        Err(e) => ExecutionError::runtime(e.to_string()).into(),
    }
}

#[async_trait]
impl CodeExecutorPort for LuaSandboxExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> ExecutionOutcome {
        if let Some(token) = find_restricted_token(request.source()) {
            debug!(token, "Rejected script containing restricted token");
            return ExecutionError::restricted(token).into();
        }

        let source = request.source().to_string();
        let limits = self.limits.clone();
        match tokio::task::spawn_blocking(move || run_script(&source, &limits)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Script worker did not complete");
                ExecutionError::internal(e.to_string()).into()
            }
        }
    }
}
