//! Application-level configuration.
//!
//! - [`PipelineParams`] — time budgets for each external call
//! - [`MeshMode`] / [`MeshModeSwitch`] — live vs. mock mesh generation

pub mod pipeline_params;

pub use pipeline_params::{MeshMode, MeshModeSwitch, PipelineParams};
