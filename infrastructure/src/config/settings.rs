//! Raw configuration data
//!
//! `FileConfig` mirrors the TOML file and the `MENTOR_*` environment
//! variables one-to-one. Every field has a default so a missing file or
//! variable never fails extraction.

use mentor_application::MeshMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("port cannot be 0")]
    InvalidPort,

    #[error("use_live_mesh is enabled but mesh_api_key is not set")]
    MissingMeshApiKey,

    #[error("use_live_mesh is enabled but mesh_base_url is not set")]
    MissingMeshBaseUrl,

    #[error("allowed_origin '{0}' is not a valid origin")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Key for the guidance (text generation) backend
    pub generation_api_key: Option<String>,
    /// Key for the mesh generation backend
    pub mesh_api_key: Option<String>,
    /// Base URL of the mesh generation backend
    pub mesh_base_url: Option<String>,
    /// Use the live mesh backend instead of the mock catalog
    pub use_live_mesh: bool,
    /// Listening port
    pub port: u16,
    /// CORS origin allowed to open the socket
    pub allowed_origin: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            generation_api_key: None,
            mesh_api_key: None,
            mesh_base_url: None,
            use_live_mesh: false,
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl FileConfig {
    pub fn mesh_mode(&self) -> MeshMode {
        MeshMode::from_live_flag(self.use_live_mesh)
    }

    /// Generation key with blank values treated as unset.
    pub fn generation_api_key(&self) -> Option<&str> {
        non_blank(self.generation_api_key.as_deref())
    }

    /// Mesh key and base URL, if both are present.
    pub fn mesh_backend(&self) -> Option<(&str, &str)> {
        Some((
            non_blank(self.mesh_base_url.as_deref())?,
            non_blank(self.mesh_api_key.as_deref())?,
        ))
    }

    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if !(self.allowed_origin.starts_with("http://")
            || self.allowed_origin.starts_with("https://"))
        {
            return Err(ConfigValidationError::InvalidOrigin(
                self.allowed_origin.clone(),
            ));
        }
        if self.use_live_mesh {
            if non_blank(self.mesh_api_key.as_deref()).is_none() {
                return Err(ConfigValidationError::MissingMeshApiKey);
            }
            if non_blank(self.mesh_base_url.as_deref()).is_none() {
                return Err(ConfigValidationError::MissingMeshBaseUrl);
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
