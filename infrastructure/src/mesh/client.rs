//! HTTP mesh-generation adapter
//!
//! Implements `MeshGateway` against the external mesh service.

use super::types::{MESH_API_VERSION, MeshRequest, MeshResponse};
use crate::http::{build_client, map_transport_error};
use async_trait::async_trait;
use mentor_application::{GatewayError, MeshGateway};
use mentor_domain::Mesh;
use std::time::Duration;
use tracing::debug;

/// Hard per-request timeout, shorter than the client-facing budget.
pub const MESH_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct HttpMeshGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpMeshGateway {
    /// Create a gateway posting to `<base_url>/generate`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, api_key, MESH_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: format!("{}/generate", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MeshGateway for HttpMeshGateway {
    async fn generate_mesh(&self, directive: &str) -> Result<Mesh, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("X-API-Version", MESH_API_VERSION)
            .json(&MeshRequest::new(directive))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let parsed: MeshResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;
        let mesh = parsed
            .into_mesh()
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Mesh backend replied"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn generate_handler(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some("Bearer mesh-key");
        let versioned = headers.get("x-api-version").and_then(|v| v.to_str().ok())
            == Some(MESH_API_VERSION);
        if !authorized || !versioned {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if body["parameters"]["format"] != "vertices-indices" {
            return StatusCode::BAD_REQUEST.into_response();
        }
        match body["prompt"].as_str().unwrap_or_default() {
            "garbage" => Json(json!({"model": {"mesh": {"vertices": []}}})).into_response(),
            "broken" => (StatusCode::OK, "not json").into_response(),
            "slow" => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                StatusCode::OK.into_response()
            }
            "down" => StatusCode::BAD_GATEWAY.into_response(),
            _ => Json(json!({
                "model": {"mesh": {
                    "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]],
                    "faces": [[0, 1, 2], [0, 2, 3]]
                }}
            }))
            .into_response(),
        }
    }

    async fn spawn_backend() -> String {
        let app = Router::new().route("/generate", post(generate_handler));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    async fn gateway() -> HttpMeshGateway {
        HttpMeshGateway::with_timeout(&spawn_backend().await, "mesh-key", Duration::from_millis(500))
            .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = HttpMeshGateway::new("https://mesh.example.com/v1/", "k").unwrap();
        assert_eq!(gateway.endpoint(), "https://mesh.example.com/v1/generate");
    }

    #[tokio::test]
    async fn test_generate_mesh_flattens_response() {
        let mesh = gateway().await.generate_mesh("a square").await.unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_vertices_is_malformed() {
        let err = gateway().await.generate_mesh("garbage").await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_json_is_malformed() {
        let err = gateway().await.generate_mesh("broken").await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_bad_gateway_is_unavailable() {
        let err = gateway().await.generate_mesh("down").await.unwrap_err();
        assert!(matches!(err, GatewayError::HttpStatus { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let err = gateway().await.generate_mesh("slow").await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_wrong_key_rejected() {
        let base = spawn_backend().await;
        let gateway = HttpMeshGateway::new(&base, "other").unwrap();
        let err = gateway.generate_mesh("a square").await.unwrap_err();
        assert!(matches!(err, GatewayError::HttpStatus { status: 401, .. }));
    }
}
