//! Execution domain
//!
//! Requests for sandboxed script execution, their classified outcomes, and
//! the static denylist consulted before anything runs.

pub mod policy;
pub mod value_objects;

pub use policy::{RESTRICTED_TOKENS, find_restricted_token};
pub use value_objects::{
    EXECUTION_ERROR_PREFIX, ExecutionError, ExecutionErrorKind, ExecutionOutcome, ExecutionRequest,
};
