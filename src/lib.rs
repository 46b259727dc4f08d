//! # Bookstore
//!
//! A multi-client TCP server over a shared, in-memory book catalog:
//! - Line-based text protocol with an `END_RESPONSE` sentinel
//! - One thread per connection
//! - Lock-free (for the caller) lookups, try-only Write Guard for appends
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Listener                            │
//! │                  (accept, spawn thread)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one per client
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Session                                 │
//! │            (parse line → Request → Response)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Lookups   │          │ Write Guard │
//!   │  (no lock)  │          │ (try_lock)  │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └──────────┬─────────────┘
//!                     ▼
//!              ┌─────────────┐
//!              │   Catalog   │
//!              │  (RwLock)   │
//!              └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookstoreError, RecordError, Result};
pub use config::Config;
pub use catalog::{Book, Catalog};
pub use network::Server;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the bookstore server
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
