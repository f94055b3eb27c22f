//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`] — a question posed to the mentor
//! - [`error::DomainError`] — invariant violations for value objects

pub mod error;
pub mod query;
