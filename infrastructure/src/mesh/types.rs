//! Wire types for the mesh-generation service.

use mentor_domain::Mesh;
use serde::{Deserialize, Serialize};

/// API version sent in the `X-API-Version` header.
pub const MESH_API_VERSION: &str = "2024-01";

/// Fixed generation parameters
#[derive(Debug, Clone, Serialize)]
pub struct MeshParameters {
    pub resolution: &'static str,
    pub format: &'static str,
    pub units: &'static str,
}

impl Default for MeshParameters {
    fn default() -> Self {
        Self {
            resolution: "high",
            format: "vertices-indices",
            units: "mm",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MeshRequest<'a> {
    pub prompt: &'a str,
    pub parameters: MeshParameters,
}

impl<'a> MeshRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            parameters: MeshParameters::default(),
        }
    }
}

/// `{ model: { mesh: { vertices: [[x,y,z],…], faces: [[i,j,k],…] } } }`
///
/// Every level is optional so a missing level reads as malformed data
/// instead of a JSON error with no context.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MeshResponse {
    #[serde(default)]
    pub model: Option<ModelPayload>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ModelPayload {
    #[serde(default)]
    pub mesh: Option<MeshPayload>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MeshPayload {
    #[serde(default)]
    pub vertices: Vec<[f32; 3]>,
    #[serde(default)]
    pub faces: Vec<Vec<u32>>,
}

/// Reasons a response cannot become a [`Mesh`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshPayloadError {
    #[error("response has no model.mesh object")]
    MissingMesh,

    #[error("response mesh has no vertices")]
    NoVertices,

    #[error("invalid mesh: {0}")]
    Invalid(#[from] mentor_domain::DomainError),
}

impl MeshResponse {
    /// Flatten and validate the payload.
    pub fn into_mesh(self) -> Result<Mesh, MeshPayloadError> {
        let payload = self
            .model
            .and_then(|m| m.mesh)
            .ok_or(MeshPayloadError::MissingMesh)?;
        if payload.vertices.is_empty() {
            return Err(MeshPayloadError::NoVertices);
        }
        Ok(Mesh::from_faces(&payload.vertices, &payload.faces)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MeshResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let json = serde_json::to_value(MeshRequest::new("a cube")).unwrap();
        assert_eq!(json["prompt"], "a cube");
        assert_eq!(json["parameters"]["resolution"], "high");
        assert_eq!(json["parameters"]["format"], "vertices-indices");
        assert_eq!(json["parameters"]["units"], "mm");
    }

    #[test]
    fn test_flattens_vertices_and_faces() {
        let mesh = parse(
            r#"{"model":{"mesh":{"vertices":[[0,0,0],[1,0,0],[0,1,0]],"faces":[[0,1,2]]}}}"#,
        )
        .into_mesh()
        .unwrap();
        assert_eq!(mesh.vertices(), &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_vertices_without_faces_is_valid() {
        let mesh = parse(r#"{"model":{"mesh":{"vertices":[[0,0,0]]}}}"#)
            .into_mesh()
            .unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_missing_levels() {
        assert_eq!(parse("{}").into_mesh(), Err(MeshPayloadError::MissingMesh));
        assert_eq!(
            parse(r#"{"model":{}}"#).into_mesh(),
            Err(MeshPayloadError::MissingMesh)
        );
    }

    #[test]
    fn test_empty_vertices_is_not_an_empty_mesh() {
        assert_eq!(
            parse(r#"{"model":{"mesh":{"vertices":[],"faces":[]}}}"#).into_mesh(),
            Err(MeshPayloadError::NoVertices)
        );
    }

    #[test]
    fn test_out_of_range_face_rejected() {
        let result = parse(r#"{"model":{"mesh":{"vertices":[[0,0,0]],"faces":[[0,1,2]]}}}"#)
            .into_mesh();
        assert!(matches!(result, Err(MeshPayloadError::Invalid(_))));
    }
}
