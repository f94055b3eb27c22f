//! Directive extraction for mentor guidance.
//!
//! The language backend is asked to end its explanation with a line of the
//! form `CAD_PROMPT: <description>`. These functions split raw output into
//! the explanation shown to the student and the directive handed to mesh
//! generation. They are pure text handling: no I/O, and never an error,
//! because a missing or empty marker has a defined fallback.
//!
//! | Raw output | Explanation | Directive |
//! |------------|-------------|-----------|
//! | contains a marker line | text without that line | trimmed text after the marker |
//! | no marker line | full text | `"3D model showing: " + query` |

use super::value_objects::GuidanceResult;
use crate::core::query::Query;

/// Marker token that introduces the visualization directive.
pub const DIRECTIVE_MARKER: &str = "CAD_PROMPT:";

/// Prefix of a directive synthesized from the query text.
pub const SYNTHESIZED_DIRECTIVE_PREFIX: &str = "3D model showing: ";

/// Explanation used when the backend produced nothing but a marker line.
pub const EMPTY_EXPLANATION: &str = "Here is a 3D model to help you visualize the answer.";

/// Build the directive used when the backend did not provide one.
pub fn synthesize_directive(query: &Query) -> String {
    format!("{}{}", SYNTHESIZED_DIRECTIVE_PREFIX, query.text())
}

/// Find the first marker line.
///
/// # Returns
///
/// `Some((explanation, directive))` if a line contains the marker followed by
/// non-blank text, `None` otherwise. The explanation keeps every other line
/// in order and is trimmed.
pub fn extract_directive(raw: &str) -> Option<(String, String)> {
    let mut lines: Vec<&str> = raw.lines().collect();
    let (position, directive) = lines.iter().enumerate().find_map(|(i, line)| {
        line.find(DIRECTIVE_MARKER)
            .map(|at| (i, directive_text(&line[at + DIRECTIVE_MARKER.len()..])))
    })?;
    if directive.is_empty() {
        return None;
    }
    let directive = directive.to_string();
    lines.remove(position);
    Some((lines.join("\n").trim().to_string(), directive))
}

/// Text after the marker, without the closing emphasis of `**CAD_PROMPT:**`.
fn directive_text(remainder: &str) -> &str {
    remainder.trim_start_matches(['*', '_']).trim()
}

/// Split raw backend output into a [`GuidanceResult`].
///
/// Always returns both fields populated: a missing directive is synthesized
/// from the query and an empty explanation is replaced by
/// [`EMPTY_EXPLANATION`].
pub fn parse_guidance(raw: &str, query: &Query) -> GuidanceResult {
    let (explanation, directive) = match extract_directive(raw) {
        Some(parts) => parts,
        None => (raw.trim().to_string(), synthesize_directive(query)),
    };
    let explanation = if explanation.is_empty() {
        EMPTY_EXPLANATION.to_string()
    } else {
        explanation
    };
    GuidanceResult::new(explanation, directive)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== extract_directive Tests ====================

    #[test]
    fn test_extract_directive_last_line() {
        let raw = "A lens bends light.\nIt focuses an image.\nCAD_PROMPT:  a camera lens cross-section  ";
        let (explanation, directive) = extract_directive(raw).unwrap();
        assert_eq!(directive, "a camera lens cross-section");
        assert_eq!(explanation, "A lens bends light.\nIt focuses an image.");
    }

    #[test]
    fn test_extract_directive_middle_line() {
        let raw = "Intro\nCAD_PROMPT: a gear train\nOutro";
        let (explanation, directive) = extract_directive(raw).unwrap();
        assert_eq!(directive, "a gear train");
        assert_eq!(explanation, "Intro\nOutro");
    }

    #[test]
    fn test_extract_directive_first_match_wins() {
        let raw = "CAD_PROMPT: first\nCAD_PROMPT: second";
        let (explanation, directive) = extract_directive(raw).unwrap();
        assert_eq!(directive, "first");
        assert_eq!(explanation, "CAD_PROMPT: second");
    }

    #[test]
    fn test_extract_directive_with_leading_decoration() {
        let raw = "Text\n**CAD_PROMPT:** a pyramid";
        let (explanation, directive) = extract_directive(raw).unwrap();
        assert_eq!(directive, "a pyramid");
        assert_eq!(explanation, "Text");

        let (_, directive) = extract_directive("__CAD_PROMPT:__ a gear").unwrap();
        assert_eq!(directive, "a gear");
    }

    #[test]
    fn test_extract_directive_emphasis_only_is_empty() {
        assert!(extract_directive("Text
**CAD_PROMPT:**  ").is_none());
    }

    #[test]
    fn test_extract_directive_missing() {
        assert!(extract_directive("No marker here").is_none());
        assert!(extract_directive("").is_none());
    }

    #[test]
    fn test_extract_directive_empty_remainder() {
        assert!(extract_directive("Text\nCAD_PROMPT:   ").is_none());
    }

    #[test]
    fn test_extract_directive_is_case_sensitive() {
        assert!(extract_directive("cad_prompt: a cube").is_none());
    }

    // ==================== parse_guidance Tests ====================

    #[test]
    fn test_parse_guidance_with_marker() {
        let query = Query::new("How do cameras work?");
        let result = parse_guidance("Light enters.\nCAD_PROMPT: a camera", &query);
        assert_eq!(result.explanation(), "Light enters.");
        assert_eq!(result.visualization_directive(), "a camera");
    }

    #[test]
    fn test_parse_guidance_without_marker_synthesizes() {
        let query = Query::new("How do cameras work?");
        let result = parse_guidance("  Light enters the aperture.  ", &query);
        assert_eq!(result.explanation(), "Light enters the aperture.");
        assert_eq!(
            result.visualization_directive(),
            "3D model showing: How do cameras work?"
        );
    }

    #[test]
    fn test_parse_guidance_marker_only() {
        let query = Query::new("pyramids");
        let result = parse_guidance("CAD_PROMPT: a stone pyramid", &query);
        assert_eq!(result.explanation(), EMPTY_EXPLANATION);
        assert_eq!(result.visualization_directive(), "a stone pyramid");
    }

    #[test]
    fn test_synthesize_directive() {
        assert_eq!(
            synthesize_directive(&Query::new("gear ratios")),
            "3D model showing: gear ratios"
        );
    }
}
