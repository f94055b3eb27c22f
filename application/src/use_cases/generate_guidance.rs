//! Generate Guidance use case.
//!
//! Wraps the [`GuidanceGateway`] with a bounded round trip, directive
//! extraction and a degraded fallback, so callers always receive a fully
//! populated [`GuidanceResult`].

use crate::ports::gateway_error::GatewayError;
use crate::ports::guidance_gateway::GuidanceGateway;
use mentor_domain::guidance::template::DEGRADED_EXPLANATION;
use mentor_domain::{GuidanceResult, MentorPromptTemplate, Query, parse_guidance, synthesize_directive};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Use case for turning a query into an explanation and a directive.
#[derive(Clone)]
pub struct GenerateGuidanceUseCase {
    gateway: Arc<dyn GuidanceGateway>,
    timeout: Duration,
}

impl GenerateGuidanceUseCase {
    pub fn new(gateway: Arc<dyn GuidanceGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// The result returned whenever the backend cannot be used.
    pub fn degraded(query: &Query) -> GuidanceResult {
        GuidanceResult::new(DEGRADED_EXPLANATION, synthesize_directive(query))
    }

    /// Generate guidance for the query. Never fails.
    pub async fn execute(&self, query: &Query) -> GuidanceResult {
        match self.request_raw(query).await {
            Ok(raw) => {
                let result = parse_guidance(&raw, query);
                debug!(
                    directive = %result.visualization_directive(),
                    "Guidance generated"
                );
                result
            }
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), "Guidance generation failed, degrading");
                Self::degraded(query)
            }
        }
    }

    async fn request_raw(&self, query: &Query) -> Result<String, GatewayError> {
        let prompt = MentorPromptTemplate::guidance(query);
        let raw = tokio::time::timeout(self.timeout, self.gateway.generate(&prompt))
            .await
            .map_err(|_| GatewayError::Timeout)??;
        if raw.trim().is_empty() {
            return Err(GatewayError::MalformedResponse(
                "empty generation output".to_string(),
            ));
        }
        Ok(raw)
    }
}
