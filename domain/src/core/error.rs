//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when a value object would be constructed in violation of its
/// invariants. Meshes are the only value objects with buffer invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("vertex buffer length {0} is not a multiple of 3")]
    VertexStride(usize),

    #[error("index buffer length {0} is not a multiple of 3")]
    IndexStride(usize),

    #[error("index {index} is out of range for a mesh with {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("face {face} has {len} corners, expected 3")]
    NonTriangularFace { face: usize, len: usize },
}

impl DomainError {
    /// Check if this error was caused by a bad index rather than a bad stride
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            DomainError::IndexOutOfRange { .. } | DomainError::NonTriangularFace { .. }
        )
    }
}
