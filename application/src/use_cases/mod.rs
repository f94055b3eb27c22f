//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod execute_code;
pub mod generate_guidance;
pub mod run_mentor;
