//! Error types for the bookstore server
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BookstoreError
pub type Result<T> = std::result::Result<T, BookstoreError>;

/// Unified error type for bookstore operations
#[derive(Debug, Error)]
pub enum BookstoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Listener Errors
    // -------------------------------------------------------------------------
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Line exceeds {0} bytes")]
    LineTooLong(usize),

    #[error("Invalid book record: {0}")]
    InvalidRecord(#[from] RecordError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons an `ADD_BOOK_REQUEST:` payload is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("expected a line starting with ADD_BOOK_REQUEST:")]
    MissingMarker,

    #[error("expected 4 fields (isbn,title,author,price), got {0}")]
    FieldCount(usize),

    #[error("invalid price '{0}'")]
    InvalidPrice(String),
}
