//! Presentation layer for visual-mentor
//!
//! This crate contains the CLI definition and the WebSocket gateway
//! that exposes the mentor and execution use cases to browsers.

pub mod cli;
pub mod gateway;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use gateway::{AppState, ClientEvent, ServerEvent, build_router, serve, serve_listener};
