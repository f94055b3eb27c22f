//! Sandboxed script execution backed by mlua (Lua 5.4).
//!
//! # Modules
//!
//! - `vm` — VM construction, capability removal and the deadline hook
//! - `render` — return value to display text
//! - `engine` — `LuaSandboxExecutor`, the `CodeExecutorPort` adapter

mod engine;
mod render;
mod vm;

pub use engine::{LuaSandboxExecutor, SandboxLimits};
pub use vm::REMOVED_GLOBALS;
