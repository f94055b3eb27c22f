//! Static denylist applied before any script runs.
//!
//! This is a coarse text pre-filter. It over-blocks harmless identifiers
//! (`reimport`, `processed`) and can be bypassed by building names at run
//! time, so it is NOT the isolation boundary: the interpreter itself is
//! created without host-facing libraries. The token set is a product
//! decision; keep it as is unless that decision changes.
//!
//! The interpreter's deadline is checked between instructions, so one
//! long-running library call (a pathological `string.find` pattern) runs to
//! completion before the script is stopped.

/// Tokens rejected anywhere in submitted source, compared case-insensitively.
pub const RESTRICTED_TOKENS: [&str; 3] = ["process", "require", "import"];

/// Return the first restricted token found in `source`, if any.
pub fn find_restricted_token(source: &str) -> Option<&'static str> {
    let lower = source.to_lowercase();
    RESTRICTED_TOKENS
        .iter()
        .copied()
        .find(|token| lower.contains(token))
}
