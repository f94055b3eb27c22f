//! Guidance value objects

use serde::{Deserialize, Serialize};

/// Explanation text plus the directive that drives mesh generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResult {
    explanation: String,
    visualization_directive: String,
}

impl GuidanceResult {
    pub fn new(explanation: impl Into<String>, visualization_directive: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            visualization_directive: visualization_directive.into(),
        }
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn visualization_directive(&self) -> &str {
        &self.visualization_directive
    }

    /// Split into `(explanation, directive)`
    pub fn into_parts(self) -> (String, String) {
        (self.explanation, self.visualization_directive)
    }
}
