//! Guidance backend (Gemini `generateContent`)

pub mod gemini;
pub mod types;

pub use gemini::{DEFAULT_GENERATION_ENDPOINT, GeminiGuidanceGateway};
