//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod code_executor;
pub mod gateway_error;
pub mod guidance_gateway;
pub mod mesh_gateway;
