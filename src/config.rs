//! Configuration for the customer store server
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{CrmError, Result};

/// Main configuration for a server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Path prefix the customer routes are mounted under
    pub base_path: String,

    // -------------------------------------------------------------------------
    // Content Configuration
    // -------------------------------------------------------------------------
    /// Directory served for any path outside the API
    pub static_dir: PathBuf,

    /// JSON file bulk-loaded into the store before serving
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4000".to_string(),
            base_path: "/customers".to_string(),
            static_dir: PathBuf::from("./public"),
            seed_file: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the listen address and base path are usable
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if !self.base_path.starts_with('/') {
            return Err(CrmError::Config(format!(
                "base path must start with '/': {}",
                self.base_path
            )));
        }
        if self.base_path.len() > 1 && self.base_path.ends_with('/') {
            return Err(CrmError::Config(format!(
                "base path must not end with '/': {}",
                self.base_path
            )));
        }
        if self.base_path == "/" {
            return Err(CrmError::Config("base path cannot be the root".to_string()));
        }

        Ok(())
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            CrmError::Config(format!("invalid listen address {}: {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the path prefix for the customer routes
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.config.base_path = path.into();
        self
    }

    /// Set the static content directory
    pub fn static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.static_dir = path.into();
        self
    }

    /// Set the seed file loaded at startup
    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.seed_file = Some(path.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
