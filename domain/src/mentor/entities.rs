//! Mentor query lifecycle and consolidated response.

use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Where the mesh in a [`MentorResponse`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshSource {
    /// Live mesh generation succeeded
    Live,
    /// Mock mode was selected for this query
    Mock,
    /// Live generation was attempted and failed
    Fallback,
}

impl MeshSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeshSource::Live => "live",
            MeshSource::Mock => "mock",
            MeshSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for MeshSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// States a query passes through on its way to a response.
///
/// ```text
/// Received -> GuidanceRequested -> GuidanceReady -> MeshRequested
///          -> MeshReady | MeshFailed -> MockApplied -> Responded
/// ```
///
/// `Responded` is the only terminal state; every path reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryState {
    Received,
    GuidanceRequested,
    GuidanceReady,
    MeshRequested,
    MeshReady,
    MeshFailed,
    MockApplied,
    Responded,
}

impl QueryState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueryState::Responded)
    }

    /// Whether `next` is a legal successor of `self`.
    ///
    /// Any state may jump straight to `MockApplied` or `Responded`, which is
    /// how blank queries, mock mode and internal faults short-circuit.
    pub fn can_transition_to(&self, next: QueryState) -> bool {
        use QueryState::*;
        match (self, next) {
            (Responded, _) => false,
            (_, Responded) | (_, MockApplied) => true,
            (Received, GuidanceRequested) => true,
            (GuidanceRequested, GuidanceReady) => true,
            (GuidanceReady, MeshRequested) => true,
            (MeshRequested, MeshReady) | (MeshRequested, MeshFailed) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// The single payload returned for a query. Always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorResponse {
    pub guidance: String,
    pub model: Mesh,
    #[serde(skip)]
    pub mesh_source: Option<MeshSource>,
}

impl MentorResponse {
    pub fn new(guidance: impl Into<String>, model: Mesh, mesh_source: MeshSource) -> Self {
        Self {
            guidance: guidance.into(),
            model,
            mesh_source: Some(mesh_source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        use QueryState::*;
        let path = [
            Received,
            GuidanceRequested,
            GuidanceReady,
            MeshRequested,
            MeshReady,
            Responded,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_fallback_path_transitions() {
        use QueryState::*;
        assert!(MeshRequested.can_transition_to(MeshFailed));
        assert!(MeshFailed.can_transition_to(MockApplied));
        assert!(MockApplied.can_transition_to(Responded));
    }

    #[test]
    fn test_responded_is_terminal() {
        assert!(QueryState::Responded.is_terminal());
        assert!(!QueryState::Responded.can_transition_to(QueryState::Received));
        assert!(!QueryState::MeshFailed.is_terminal());
    }

    #[test]
    fn test_skipping_guidance_is_illegal() {
        assert!(!QueryState::Received.can_transition_to(QueryState::MeshRequested));
    }

    #[test]
    fn test_mesh_source_display() {
        assert_eq!(MeshSource::Fallback.to_string(), "fallback");
    }
}
