//! Mentor domain
//!
//! The per-query state machine and the consolidated [`MentorResponse`].

pub mod entities;

pub use entities::{MentorResponse, MeshSource, QueryState};
