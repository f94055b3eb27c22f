//! Run Mentor use case
//!
//! Orchestrates one query through guidance generation, mesh generation and
//! the fallback policy, and always produces a [`MentorResponse`].

use super::generate_guidance::GenerateGuidanceUseCase;
use crate::config::{MeshMode, MeshModeSwitch};
use crate::ports::gateway_error::GatewayError;
use crate::ports::mesh_gateway::MeshGateway;
use futures::FutureExt;
use mentor_domain::guidance::template::{BLANK_QUERY_EXPLANATION, INTERNAL_ERROR_EXPLANATION};
use mentor_domain::{MentorResponse, Mesh, MeshSource, MockCatalog, Query, QueryState};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Use case for answering a mentor query.
///
/// Flow:
/// 1. Generate guidance (never fails, see [`GenerateGuidanceUseCase`])
/// 2. Read the [`MeshModeSwitch`] once
/// 3. Live mode: call the [`MeshGateway`] with a hard timeout; on failure,
///    look the directive up in the [`MockCatalog`]
/// 4. Mock mode: look the directive up in the [`MockCatalog`]
///
/// A panic anywhere in the flow is contained and answered with
/// [`INTERNAL_ERROR_EXPLANATION`] and a catalog mesh.
#[derive(Clone)]
pub struct RunMentorUseCase {
    guidance: GenerateGuidanceUseCase,
    mesh_gateway: Option<Arc<dyn MeshGateway>>,
    mesh_mode: MeshModeSwitch,
    mesh_timeout: Duration,
}

impl RunMentorUseCase {
    pub fn new(
        guidance: GenerateGuidanceUseCase,
        mesh_mode: MeshModeSwitch,
        mesh_timeout: Duration,
    ) -> Self {
        Self {
            guidance,
            mesh_gateway: None,
            mesh_mode,
            mesh_timeout,
        }
    }

    /// Attach the live mesh backend.
    pub fn with_mesh_gateway(mut self, gateway: Arc<dyn MeshGateway>) -> Self {
        self.mesh_gateway = Some(gateway);
        self
    }

    /// The switch this use case reads on every query.
    pub fn mesh_mode(&self) -> &MeshModeSwitch {
        &self.mesh_mode
    }

    /// Response used when the pipeline itself failed.
    pub fn internal_error_response(query: &Query) -> MentorResponse {
        MentorResponse::new(
            INTERNAL_ERROR_EXPLANATION,
            MockCatalog::lookup(query.text()),
            MeshSource::Fallback,
        )
    }

    /// Answer the query. Always returns a populated response.
    pub async fn execute(&self, query: &Query) -> MentorResponse {
        match AssertUnwindSafe(self.run(query)).catch_unwind().await {
            Ok(response) => response,
            Err(_) => {
                error!(query = %query.preview(), "Mentor pipeline panicked");
                Self::internal_error_response(query)
            }
        }
    }

    async fn run(&self, query: &Query) -> MentorResponse {
        let mut tracker = StateTracker::new();
        info!(query = %query.preview(), "Mentor query received");

        if query.is_blank() {
            tracker.advance(QueryState::MockApplied);
            tracker.advance(QueryState::Responded);
            return MentorResponse::new(BLANK_QUERY_EXPLANATION, Mesh::quad(), MeshSource::Mock);
        }

        tracker.advance(QueryState::GuidanceRequested);
        let (explanation, directive) = self.guidance.execute(query).await.into_parts();
        tracker.advance(QueryState::GuidanceReady);

        let mode = self.mesh_mode.current();
        let (model, source) = match (mode, &self.mesh_gateway) {
            (MeshMode::Live, Some(gateway)) => {
                tracker.advance(QueryState::MeshRequested);
                match self.request_mesh(gateway.as_ref(), &directive).await {
                    Ok(mesh) => {
                        tracker.advance(QueryState::MeshReady);
                        (mesh, MeshSource::Live)
                    }
                    Err(e) => {
                        tracker.advance(QueryState::MeshFailed);
                        warn!(error = %e, kind = ?e.kind(), "Live mesh generation failed, using catalog");
                        tracker.advance(QueryState::MockApplied);
                        (MockCatalog::lookup(&directive), MeshSource::Fallback)
                    }
                }
            }
            (MeshMode::Live, None) => {
                warn!("Live mesh mode selected but no mesh backend is configured");
                tracker.advance(QueryState::MockApplied);
                (MockCatalog::lookup(&directive), MeshSource::Fallback)
            }
            (MeshMode::Mock, _) => {
                tracker.advance(QueryState::MockApplied);
                (MockCatalog::lookup(&directive), MeshSource::Mock)
            }
        };

        tracker.advance(QueryState::Responded);
        info!(
            mesh_source = %source,
            triangles = model.triangle_count(),
            "Mentor response ready"
        );
        MentorResponse::new(explanation, model, source)
    }

    async fn request_mesh(
        &self,
        gateway: &dyn MeshGateway,
        directive: &str,
    ) -> Result<Mesh, GatewayError> {
        tokio::time::timeout(self.mesh_timeout, gateway.generate_mesh(directive))
            .await
            .map_err(|_| GatewayError::Timeout)?
    }
}

/// Records and logs state transitions of one query.
struct StateTracker {
    state: QueryState,
}

impl StateTracker {
    fn new() -> Self {
        Self {
            state: QueryState::Received,
        }
    }

    fn advance(&mut self, next: QueryState) {
        if !self.state.can_transition_to(next) {
            warn!(from = %self.state, to = %next, "Illegal query state transition");
        }
        debug!(from = %self.state, to = %next, "Query state");
        self.state = next;
    }
}
