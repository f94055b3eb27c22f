//! Query value object

use serde::{Deserialize, Serialize};

/// Maximum number of characters shown when a query is echoed into logs.
const PREVIEW_CHARS: usize = 80;

/// A natural-language question posed to the mentor (Value Object)
///
/// Queries are ephemeral: one is created per `mentor_query` message and
/// dropped once the consolidated response has been emitted. Blank text is
/// representable so the orchestrator can answer it instead of rejecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the query contains nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Short single-line rendition for log fields.
    pub fn preview(&self) -> String {
        let flat = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= PREVIEW_CHARS {
            flat
        } else {
            let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", cut)
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}
