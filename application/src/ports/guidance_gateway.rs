//! Guidance gateway port
//!
//! Defines the interface for the external language-generation backend.

use super::gateway_error::GatewayError;
use async_trait::async_trait;

/// Gateway for free-form text generation
///
/// Implementations send one instruction prompt and return the raw generated
/// text. They do not parse the directive and do not degrade on failure; both
/// are the job of [`GenerateGuidanceUseCase`](crate::use_cases::generate_guidance::GenerateGuidanceUseCase).
#[async_trait]
pub trait GuidanceGateway: Send + Sync {
    /// Generate text for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
