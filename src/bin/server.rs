//! Bookstore Server Binary
//!
//! Starts the TCP server on port 9000 by default.

use clap::Parser;
use bookstore::{Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookstore Server
#[derive(Parser, Debug)]
#[command(name = "bookstore-server")]
#[command(about = "Multi-client TCP book catalog server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:9000")]
    listen: String,

    /// Start with an empty catalog instead of the seed records
    #[arg(long)]
    no_seed: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Bookstore Server v{}", bookstore::VERSION);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .seed_catalog(!args.no_seed)
        .build();

    let server = match Server::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Catalog loaded with {} books", server.catalog().len());

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
