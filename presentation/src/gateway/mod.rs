//! WebSocket session gateway
//!
//! - `protocol` — JSON frame types
//! - `session` — per-connection reader, writer and request tasks
//! - `server` — router, CORS, health probe and shutdown

pub mod protocol;
pub mod server;
pub mod session;

pub use protocol::{ClientEvent, ProtocolError, ServerEvent};
pub use server::{AppState, ServerError, build_router, serve, serve_listener, shutdown_signal};
pub use session::Session;
