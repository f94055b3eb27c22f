//! Application layer for visual-mentor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{MeshMode, MeshModeSwitch, PipelineParams};
pub use ports::{
    code_executor::CodeExecutorPort,
    gateway_error::{GatewayError, UpstreamErrorKind},
    guidance_gateway::GuidanceGateway,
    mesh_gateway::MeshGateway,
};
pub use use_cases::execute_code::ExecuteCodeUseCase;
pub use use_cases::generate_guidance::GenerateGuidanceUseCase;
pub use use_cases::run_mentor::RunMentorUseCase;
