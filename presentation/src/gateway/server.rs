//! HTTP surface: `/ws` upgrade, `/health`, CORS and graceful shutdown.

use super::session::Session;
use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::http::{HeaderValue, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use mentor_application::{ExecuteCodeUseCase, RunMentorUseCase};
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Shared state handed to every connection.
#[derive(Clone)]
pub struct AppState {
    pub mentor: Arc<RunMentorUseCase>,
    pub executor: Arc<ExecuteCodeUseCase>,
    /// Cancelled on server shutdown; each session holds a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(mentor: Arc<RunMentorUseCase>, executor: Arc<ExecuteCodeUseCase>) -> Self {
        Self {
            mentor,
            executor,
            shutdown: CancellationToken::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    live_mesh: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        live_mesh: state.mentor.mesh_mode().current().is_live(),
    })
}

async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| Session::run(socket, state))
}

/// Build the application router.
pub fn build_router(state: AppState, allowed_origin: &str) -> Result<Router, ServerError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|_| ServerError::InvalidOrigin(allowed_origin.to_string()))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    Ok(Router::new()
        .route("/ws", get(ws_upgrade))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// Open sessions are cancelled once the signal fires.
pub async fn serve_listener(
    listener: TcpListener,
    state: AppState,
    allowed_origin: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let router = build_router(state.clone(), allowed_origin)?;
    let sessions = state.shutdown.clone();

    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Gateway listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("Shutdown requested, closing sessions");
            sessions.cancel();
        })
        .await?;
    Ok(())
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    allowed_origin: &str,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve_listener(listener, state, allowed_origin, shutdown_signal()).await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
