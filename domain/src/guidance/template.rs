//! Prompt templates for the mentor flow

use super::parsing::DIRECTIVE_MARKER;
use crate::core::query::Query;

/// User-facing apology returned when the language backend cannot answer.
pub const DEGRADED_EXPLANATION: &str = "I'm sorry, I couldn't generate an explanation right now. \
Please try again in a moment. In the meantime, here is a model related to your question.";

/// Generic message for a query that failed for an unclassified reason.
pub const INTERNAL_ERROR_EXPLANATION: &str =
    "Something went wrong while preparing your answer. Here is a related model instead.";

/// Reply to a query with no text.
pub const BLANK_QUERY_EXPLANATION: &str =
    "Ask me a question and I'll explain it with a 3D model.";

/// Templates for the instruction sent to the language backend
pub struct MentorPromptTemplate;

impl MentorPromptTemplate {
    /// Instruction asking for an explanation followed by a marker line.
    pub fn guidance(query: &Query) -> String {
        format!(
            r#"You are a patient mentor who explains technical and scientific concepts to students.

Answer the following question:

{question}

Write a clear explanation in a few short paragraphs. Use simple language and a concrete example.

Then, on its own final line, write a description of a single 3D object that would help the student visualize the answer, in this exact format:
{marker} <short description of the 3D object, its main parts and their arrangement>

Only the final line may start with {marker}."#,
            question = query.text().trim(),
            marker = DIRECTIVE_MARKER,
        )
    }
}
