//! Configuration loading for visual-mentor
//!
//! The priority order (highest to lowest):
//!
//! 1. `MENTOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mentor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/visual-mentor/config.toml`
//! 5. Default values

mod loader;
mod settings;

pub use loader::{ConfigLoader, ENV_PREFIX};
pub use settings::{ConfigValidationError, DEFAULT_ALLOWED_ORIGIN, DEFAULT_PORT, FileConfig};
