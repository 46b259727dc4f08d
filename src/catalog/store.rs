//! Catalog implementation
//!
//! Vec-backed book store with a separate try-only Write Guard.

use parking_lot::{Mutex, MutexGuard, RwLock};

use super::{seed_books, Book};

/// Shared, append-only collection of books
///
/// ## Locking
/// - `books`: held briefly by every scan (read) and every push (write)
/// - `write_guard`: held by one writer across a whole add-book exchange;
///   only ever acquired through [`Catalog::try_begin_write`]
pub struct Catalog {
    /// Books in insertion order (seed entries first)
    books: RwLock<Vec<Book>>,

    /// Serializes add-book exchanges across all sessions
    write_guard: Mutex<()>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a catalog holding the given books, in order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
            write_guard: Mutex::new(()),
        }
    }

    /// Create a catalog loaded with the startup seed records
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    // =========================================================================
    // Lookups (never take the Write Guard)
    // =========================================================================

    /// First book whose ISBN matches exactly
    pub fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books.read().iter().find(|b| b.isbn == isbn).cloned()
    }

    /// First book whose title matches, ignoring case
    pub fn find_by_title(&self, title: &str) -> Option<Book> {
        self.books
            .read()
            .iter()
            .find(|b| eq_ignore_case(&b.title, title))
            .cloned()
    }

    /// Every book whose author matches, ignoring case and surrounding
    /// whitespace in the query. Preserves catalog order.
    pub fn find_by_author(&self, author: &str) -> Vec<Book> {
        let wanted = author.trim();
        self.books
            .read()
            .iter()
            .filter(|b| eq_ignore_case(&b.author, wanted))
            .cloned()
            .collect()
    }

    /// Snapshot of every book in catalog order
    pub fn books(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Try to take the Write Guard without waiting
    ///
    /// Returns `None` if another session is mid-exchange. The guard is
    /// released when the returned value is dropped, on every exit path.
    pub fn try_begin_write(&self) -> Option<WriteGuard<'_>> {
        let lock = self.write_guard.try_lock()?;
        Some(WriteGuard {
            catalog: self,
            _lock: lock,
        })
    }

    /// Whether some session currently holds the Write Guard
    pub fn is_write_locked(&self) -> bool {
        self.write_guard.is_locked()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive equality without allocating
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Exclusive right to append to a [`Catalog`]
pub struct WriteGuard<'a> {
    catalog: &'a Catalog,
    _lock: MutexGuard<'a, ()>,
}

impl WriteGuard<'_> {
    /// Append a book; returns the new catalog length
    pub fn append(&self, book: Book) -> usize {
        let mut books = self.catalog.books.write();
        books.push(book);
        books.len()
    }
}
