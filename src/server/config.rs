//! Server configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::parser::DEFAULT_MAX_BODY_SIZE;
use crate::server::error::Error;

/// HTTP server configuration.
///
/// Every field has a default, so a JSON config file only needs the values it
/// changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Host (and port) clients use to reach the server; used for `Location`.
    pub host: String,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
    /// Largest request body accepted, in bytes.
    pub max_body_size: usize,
    /// Directory static resources and pages are served from.
    pub resource_root: PathBuf,
    /// Optional JSON file with the accounts allowed to log in.
    pub users_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            host: "localhost:8080".to_string(),
            max_connections: 1024,
            read_buffer_size: 8192,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            resource_root: PathBuf::from("static"),
            users_file: None,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.max_connections == 0 {
            return Err(Error::ConfigError("max_connections must be at least 1".to_string()));
        }
        if self.read_buffer_size == 0 {
            return Err(Error::ConfigError("read_buffer_size must be at least 1".to_string()));
        }
        if self.host.is_empty() {
            return Err(Error::ConfigError("host must not be empty".to_string()));
        }
        Ok(())
    }
}
