//! Infrastructure layer for visual-mentor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generation;
mod http;
pub mod mesh;
pub mod sandbox;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use generation::GeminiGuidanceGateway;
pub use mesh::HttpMeshGateway;
pub use sandbox::{LuaSandboxExecutor, SandboxLimits};
