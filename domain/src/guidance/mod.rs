//! Guidance domain
//!
//! The [`GuidanceResult`] produced for every query, the directive parsing
//! contract, and the prompt sent to the language backend.

pub mod parsing;
pub mod template;
pub mod value_objects;

pub use parsing::{DIRECTIVE_MARKER, extract_directive, parse_guidance, synthesize_directive};
pub use template::MentorPromptTemplate;
pub use value_objects::GuidanceResult;
