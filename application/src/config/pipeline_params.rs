//! Pipeline parameters — per-call time budgets and the mesh mode switch.
//!
//! [`PipelineParams`] groups the static time budgets applied to each
//! suspension point of the mentor and execution flows. [`MeshModeSwitch`] is
//! the one runtime-mutable setting: it is read once per query.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Time budgets for external calls.
///
/// | Call | Default | Notes |
/// |------|---------|-------|
/// | guidance | 30 s | language backend round trip |
/// | mesh | 15 s | shorter than any upstream client timeout |
/// | execution | 2 s | enforced inside the interpreter |
/// | execution grace | 500 ms | extra wait before the caller gives up |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineParams {
    pub guidance_timeout: Duration,
    pub mesh_timeout: Duration,
    pub execution_timeout: Duration,
    pub execution_grace: Duration,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            guidance_timeout: Duration::from_secs(30),
            mesh_timeout: Duration::from_secs(15),
            execution_timeout: Duration::from_secs(2),
            execution_grace: Duration::from_millis(500),
        }
    }
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    pub fn with_guidance_timeout(mut self, timeout: Duration) -> Self {
        self.guidance_timeout = timeout;
        self
    }

    pub fn with_mesh_timeout(mut self, timeout: Duration) -> Self {
        self.mesh_timeout = timeout;
        self
    }

    pub fn with_execution_timeout(mut self, timeout: Duration) -> Self {
        self.execution_timeout = timeout;
        self
    }

    pub fn with_execution_grace(mut self, grace: Duration) -> Self {
        self.execution_grace = grace;
        self
    }

    /// Longest a caller waits for an execution before reporting `Timeout`.
    pub fn execution_deadline(&self) -> Duration {
        self.execution_timeout + self.execution_grace
    }
}

/// Source of meshes for mentor responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshMode {
    /// Call the mesh-generation backend, falling back to the catalog
    Live,
    /// Always use the mock catalog
    #[default]
    Mock,
}

impl MeshMode {
    pub fn from_live_flag(live: bool) -> Self {
        if live { MeshMode::Live } else { MeshMode::Mock }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, MeshMode::Live)
    }
}

impl std::fmt::Display for MeshMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshMode::Live => write!(f, "live"),
            MeshMode::Mock => write!(f, "mock"),
        }
    }
}

/// Shared live/mock switch.
///
/// Clones observe the same value. Readers call [`current`](Self::current)
/// once per query, so a change applies to the next query on every session.
#[derive(Debug, Clone, Default)]
pub struct MeshModeSwitch {
    live: Arc<AtomicBool>,
}

impl MeshModeSwitch {
    pub fn new(mode: MeshMode) -> Self {
        Self {
            live: Arc::new(AtomicBool::new(mode.is_live())),
        }
    }

    pub fn current(&self) -> MeshMode {
        MeshMode::from_live_flag(self.live.load(Ordering::Acquire))
    }

    pub fn set(&self, mode: MeshMode) {
        self.live.store(mode.is_live(), Ordering::Release);
    }
}
