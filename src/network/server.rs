//! TCP Server
//!
//! Accepts connections and spawns one session thread per client.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{BookstoreError, Result};
use super::Session;

/// TCP server for the book catalog
pub struct Server {
    config: Config,
    catalog: Arc<Catalog>,
    listener: TcpListener,
}

impl Server {
    /// Bind the listening socket
    ///
    /// Fails with [`BookstoreError::Bind`] if the address is unavailable.
    pub fn bind(config: Config, catalog: Arc<Catalog>) -> Result<Self> {
        let addrs = config.socket_addrs()?;
        let listener = TcpListener::bind(&addrs[..]).map_err(|source| BookstoreError::Bind {
            addr: config.listen_addr.clone(),
            source,
        })?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            config,
            catalog,
            listener,
        })
    }

    /// Bind using `config`, with a fresh catalog (seeded unless disabled)
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = if config.seed_catalog {
            Catalog::seeded()
        } else {
            Catalog::new()
        };
        Self::bind(config, Arc::new(catalog))
    }

    /// Accept connections forever (blocking)
    ///
    /// Only returns on an accept failure, which is fatal to the loop.
    pub fn run(&self) -> Result<()> {
        loop {
            let (stream, addr) = self.listener.accept().map_err(|e| {
                tracing::error!("Accept failed: {}", e);
                BookstoreError::Accept(e)
            })?;
            tracing::info!("Client connected: {}", addr);

            let catalog = Arc::clone(&self.catalog);
            let nodelay = self.config.nodelay;

            let spawned = thread::Builder::new()
                .name(format!("session-{}", addr))
                .spawn(move || {
                    let result = Session::from_stream(stream, catalog, nodelay)
                        .and_then(|mut session| session.handle());
                    match result {
                        Ok(()) => tracing::info!("Client disconnected: {}", addr),
                        Err(e) => tracing::warn!("Session {} ended with error: {}", addr, e),
                    }
                });

            if let Err(e) = spawned {
                tracing::error!("Failed to spawn session for {}: {}", addr, e);
            }
        }
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// The catalog shared with every session
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
