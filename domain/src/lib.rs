//! Domain layer for visual-mentor
//!
//! This crate contains the core value objects and pure logic of the mentor.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Guidance
//!
//! A question is answered with an explanation and a *directive*: a short
//! description of a 3D object, embedded in the language backend's output
//! behind the `CAD_PROMPT:` marker.
//!
//! ## Mesh
//!
//! The directive becomes a validated triangle [`Mesh`], either generated live
//! or taken from the [`MockCatalog`].
//!
//! ## Execution
//!
//! Students may run small scripts; every run ends in an [`ExecutionOutcome`].

pub mod core;
pub mod execution;
pub mod guidance;
pub mod mentor;
pub mod mesh;

// Re-export commonly used types
pub use crate::core::{error::DomainError, query::Query};
pub use execution::{
    ExecutionError, ExecutionErrorKind, ExecutionOutcome, ExecutionRequest, find_restricted_token,
};
pub use guidance::{GuidanceResult, MentorPromptTemplate, parse_guidance, synthesize_directive};
pub use mentor::{MentorResponse, MeshSource, QueryState};
pub use mesh::{Mesh, MockCatalog};
