//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for visual-mentor
#[derive(Parser, Debug)]
#[command(name = "visual-mentor")]
#[command(author, version, about = "Engineering mentor with 3D visual aids and a script sandbox")]
#[command(long_about = r#"
Visual Mentor serves a WebSocket endpoint that answers engineering questions
with an explanation plus a 3D mesh, and runs small Lua scripts in a sandbox.

Endpoints:
  GET /ws       WebSocket (mentor_query, execute_code)
  GET /health   Liveness probe

Configuration is loaded from (in priority order):
1. MENTOR_* environment variables
2. --config <path>     Explicit config file
3. ./mentor.toml       Project-level config
4. ~/.config/visual-mentor/config.toml   Global config

Example:
  visual-mentor --port 3001
  MENTOR_GENERATION_API_KEY=... visual-mentor --live-mesh -vv
"#)]
pub struct Cli {
    /// Port to listen on (overrides configuration)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Use the live mesh backend instead of the mock catalog
    #[arg(long)]
    pub live_mesh: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
