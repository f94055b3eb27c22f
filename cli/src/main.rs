//! CLI entrypoint for Visual Mentor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use mentor_application::{
    ExecuteCodeUseCase, GenerateGuidanceUseCase, MeshModeSwitch, PipelineParams,
    RunMentorUseCase,
};
use mentor_infrastructure::{
    ConfigLoader, FileConfig, GeminiGuidanceGateway, HttpMeshGateway, LuaSandboxExecutor,
    SandboxLimits,
};
use mentor_presentation::{AppState, Cli};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = load_config(&cli)?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.live_mesh {
        config.use_live_mesh = true;
    }
    config.validate().context("invalid configuration")?;

    info!(
        port = config.port,
        mesh_mode = %config.mesh_mode(),
        "Starting Visual Mentor"
    );

    // === Dependency Injection ===
    let params = PipelineParams::default();

    if config.generation_api_key().is_none() {
        warn!("No generation API key configured; every query will receive the fallback explanation");
    }
    let guidance_gateway = GeminiGuidanceGateway::new(config.generation_api_key().unwrap_or_default())
        .context("failed to create guidance gateway")?;
    let guidance = GenerateGuidanceUseCase::new(Arc::new(guidance_gateway), params.guidance_timeout);

    let mut mentor = RunMentorUseCase::new(
        guidance,
        MeshModeSwitch::new(config.mesh_mode()),
        params.mesh_timeout,
    );
    if let Some((base_url, api_key)) = config.mesh_backend() {
        let mesh_gateway =
            HttpMeshGateway::new(base_url, api_key).context("failed to create mesh gateway")?;
        info!(endpoint = mesh_gateway.endpoint(), "Live mesh backend configured");
        mentor = mentor.with_mesh_gateway(Arc::new(mesh_gateway));
    }

    let executor = LuaSandboxExecutor::with_limits(
        SandboxLimits::default().with_timeout(params.execution_timeout),
    );
    let execute_code = ExecuteCodeUseCase::new(Arc::new(executor), params);

    let state = AppState::new(Arc::new(mentor), Arc::new(execute_code));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    println!("Visual Mentor listening on http://{}", addr);
    println!("  WebSocket: ws://{}/ws", addr);

    mentor_presentation::serve(addr, state, &config.allowed_origin).await?;

    info!("Server stopped");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    config.map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))
}
