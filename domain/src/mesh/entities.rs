//! Triangle mesh value object.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A triangle surface: flat vertex positions plus flat triangle indices.
///
/// Both buffers are fixed-stride (three floats per point, three indices per
/// triangle) and validated on construction, so every `Mesh` that exists
/// satisfies:
///
/// - `vertices.len() % 3 == 0`
/// - `indices.len() % 3 == 0`
/// - every index `< vertices.len() / 3`
///
/// A mesh with zero triangles is valid; it is how a placeholder or
/// degenerate shape is represented.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "MeshBuffers")]
pub struct Mesh {
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

/// Unvalidated wire form of a [`Mesh`].
#[derive(Debug, Deserialize)]
struct MeshBuffers {
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl TryFrom<MeshBuffers> for Mesh {
    type Error = DomainError;

    fn try_from(buffers: MeshBuffers) -> Result<Self, Self::Error> {
        Mesh::new(buffers.vertices, buffers.indices)
    }
}

impl Mesh {
    /// Build a mesh from flat buffers, checking stride and index range.
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Result<Self, DomainError> {
        if vertices.len() % 3 != 0 {
            return Err(DomainError::VertexStride(vertices.len()));
        }
        if indices.len() % 3 != 0 {
            return Err(DomainError::IndexStride(indices.len()));
        }
        let vertex_count = vertices.len() / 3;
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(DomainError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Build a mesh from per-point and per-triangle arrays.
    pub fn from_points(points: &[[f32; 3]], triangles: &[[u32; 3]]) -> Result<Self, DomainError> {
        let vertices = points.iter().flatten().copied().collect();
        let indices = triangles.iter().flatten().copied().collect();
        Self::new(vertices, indices)
    }

    /// Build a mesh from faces of unknown arity, as delivered by a remote
    /// service. Any face that is not a triangle is rejected.
    pub fn from_faces(points: &[[f32; 3]], faces: &[Vec<u32>]) -> Result<Self, DomainError> {
        let mut indices = Vec::with_capacity(faces.len() * 3);
        for (face, corners) in faces.iter().enumerate() {
            if corners.len() != 3 {
                return Err(DomainError::NonTriangularFace {
                    face,
                    len: corners.len(),
                });
            }
            indices.extend_from_slice(corners);
        }
        let vertices = points.iter().flatten().copied().collect();
        Self::new(vertices, indices)
    }

    /// The unit quad in the XY plane: 4 vertices, 2 triangles.
    ///
    /// This is the terminal fallback shape, so it is built without going
    /// through validation.
    pub fn quad() -> Self {
        Self {
            vertices: vec![
                -1.0, -1.0, 0.0, //
                1.0, -1.0, 0.0, //
                1.0, 1.0, 0.0, //
                -1.0, 1.0, 0.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of points (vertex buffer length / 3)
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles (index buffer length / 3)
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_buffers() {
        let mesh = Mesh::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], vec![0, 1, 2])
            .unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_zero_triangles_is_valid() {
        let mesh = Mesh::new(vec![0.0, 0.0, 0.0], vec![]).unwrap();
        assert!(mesh.is_empty());
        assert!(Mesh::default().is_empty());
    }

    #[test]
    fn test_vertex_stride_rejected() {
        assert_eq!(
            Mesh::new(vec![0.0, 1.0], vec![]),
            Err(DomainError::VertexStride(2))
        );
    }

    #[test]
    fn test_index_stride_rejected() {
        assert_eq!(
            Mesh::new(vec![0.0; 9], vec![0, 1]),
            Err(DomainError::IndexStride(2))
        );
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        assert_eq!(
            Mesh::new(vec![0.0; 9], vec![0, 1, 3]),
            Err(DomainError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_from_faces_rejects_quads() {
        let points = [[0.0; 3]; 4];
        let faces = vec![vec![0, 1, 2, 3]];
        assert_eq!(
            Mesh::from_faces(&points, &faces),
            Err(DomainError::NonTriangularFace { face: 0, len: 4 })
        );
    }

    #[test]
    fn test_from_faces_flattens() {
        let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let faces = vec![vec![2, 1, 0]];
        let mesh = Mesh::from_faces(&points, &faces).unwrap();
        assert_eq!(mesh.indices(), &[2, 1, 0]);
        assert_eq!(mesh.vertices()[3], 1.0);
    }

    #[test]
    fn test_quad_shape() {
        let quad = Mesh::quad();
        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.triangle_count(), 2);
        assert!(Mesh::new(quad.vertices().to_vec(), quad.indices().to_vec()).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Mesh =
            serde_json::from_str(r#"{"vertices":[0,0,0,1,0,0,0,1,0],"indices":[0,1,2]}"#)
                .unwrap();
        assert_eq!(ok.triangle_count(), 1);

        let bad = serde_json::from_str::<Mesh>(r#"{"vertices":[0,0,0],"indices":[0,1,2]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(Mesh::quad()).unwrap();
        assert_eq!(json["vertices"].as_array().unwrap().len(), 12);
        assert_eq!(json["indices"].as_array().unwrap().len(), 6);
    }
}
