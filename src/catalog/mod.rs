//! Catalog Module
//!
//! The shared, in-memory collection of book records.
//!
//! ## Responsibilities
//! - Lock-free (for the caller) lookups by ISBN, title and author
//! - Append-only growth at runtime
//! - A single process-wide Write Guard that serializes appends
//!
//! ## Concurrency Model
//! Lookups never touch the Write Guard. The backing vector sits behind an
//! `RwLock` that is only held for the duration of a scan or a push, so a
//! reader never sees a vector mid-reallocation.

mod book;
mod store;
mod seed;

pub use book::Book;
pub use store::{Catalog, WriteGuard};
pub use seed::seed_books;
