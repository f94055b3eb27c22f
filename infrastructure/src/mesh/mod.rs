//! Mesh generation backend

pub mod client;
pub mod types;

pub use client::{HttpMeshGateway, MESH_REQUEST_TIMEOUT};
pub use types::{MESH_API_VERSION, MeshPayloadError};
