//! Configuration for the bookstore server
//!
//! Centralized configuration with sensible defaults.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::{BookstoreError, Result};

/// Main configuration for a server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Disable Nagle's algorithm on accepted connections
    pub nodelay: bool,

    // -------------------------------------------------------------------------
    // Catalog Configuration
    // -------------------------------------------------------------------------
    /// Load the five fixed records at startup
    pub seed_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9000".to_string(),
            nodelay: true,
            seed_catalog: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the listen address (host names allowed)
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = self
            .listen_addr
            .to_socket_addrs()
            .map_err(|e| {
                BookstoreError::Config(format!(
                    "invalid listen address '{}': {}",
                    self.listen_addr, e
                ))
            })?
            .collect();

        if addrs.is_empty() {
            return Err(BookstoreError::Config(format!(
                "listen address '{}' resolved to nothing",
                self.listen_addr
            )));
        }
        Ok(addrs)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Enable or disable TCP_NODELAY on accepted sockets
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Whether to start with the fixed seed records
    pub fn seed_catalog(mut self, seed: bool) -> Self {
        self.config.seed_catalog = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
