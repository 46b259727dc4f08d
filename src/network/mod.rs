//! Network Module
//!
//! TCP listener and per-connection sessions.
//!
//! ## Architecture
//! - Single acceptor loop
//! - One OS thread per accepted connection (no pool, no cap)
//! - Every session shares one `Arc<Catalog>`

mod server;
mod connection;

pub use server::Server;
pub use connection::Session;
