//! Gemini guidance adapter
//!
//! Implements `GuidanceGateway` over the `generateContent` REST API.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::http::{body_excerpt, build_client, map_transport_error};
use async_trait::async_trait;
use mentor_application::{GatewayError, GuidanceGateway};
use std::time::Duration;
use tracing::debug;

/// Default API endpoint for text generation.
pub const DEFAULT_GENERATION_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Transport-level timeout; the use case applies its own budget on top.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiGuidanceGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiGuidanceGateway {
    /// Create a gateway for the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(REQUEST_TIMEOUT)?,
            endpoint: DEFAULT_GENERATION_ENDPOINT.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Point the gateway at a different `generateContent` URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl GuidanceGateway for GeminiGuidanceGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if self.api_key.is_empty() {
            return Err(GatewayError::NotConfigured(
                "generation API key is not set".to_string(),
            ));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message: body_excerpt(&body, 200),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;
        let text = parsed.first_text().ok_or_else(|| {
            GatewayError::MalformedResponse("response contained no candidate text".to_string())
        })?;

        debug!(bytes = text.len(), "Generation backend replied");
        Ok(text)
    }
}
