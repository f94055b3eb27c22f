//! Mesh gateway port
//!
//! Defines the interface for the external mesh-generation backend.

use super::gateway_error::GatewayError;
use async_trait::async_trait;
use mentor_domain::Mesh;

/// Gateway for turning a visualization directive into a mesh
///
/// Implementations validate the response shape before returning: a payload
/// without vertex data is a [`GatewayError::MalformedResponse`], never an
/// empty [`Mesh`].
#[async_trait]
pub trait MeshGateway: Send + Sync {
    /// Generate a mesh for the directive
    async fn generate_mesh(&self, directive: &str) -> Result<Mesh, GatewayError>;
}
