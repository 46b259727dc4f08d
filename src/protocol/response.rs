//! Response definitions
//!
//! Every outcome a session reports back to its client.

use crate::catalog::Book;

/// A response to send to the client (before the `END_RESPONSE` sentinel)
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A single matching book
    Found(Book),

    /// No book matched an ISBN or title lookup
    NotFound,

    /// Result of an author lookup, possibly empty
    ByAuthor { author: String, books: Vec<Book> },

    /// The request line matched no command
    Invalid,

    /// Another session holds the Write Guard
    Busy,

    /// Write Guard acquired, waiting for the payload line
    ReadyToAdd,

    /// Payload accepted and appended
    Added,

    /// Payload refused; the catalog is unchanged
    Rejected(String),
}

impl Response {
    pub const NOT_FOUND: &'static str = "Book not found.";
    pub const INVALID: &'static str = "Invalid request.";
    pub const BUSY: &'static str =
        "Server is busy adding a book for another client. Please wait and try again.";
    pub const READY_TO_ADD: &'static str = "Ready to add a new book";
    pub const ADDED: &'static str = "Book added successfully";
    pub const REJECTED_PREFIX: &'static str = "Cannot add book";
    pub const NO_BOOKS_BY_PREFIX: &'static str = "No books by ";

    /// The text lines of this response, in order
    pub fn lines(&self) -> Vec<String> {
        match self {
            Response::Found(book) => vec![book.to_string()],
            Response::NotFound => vec![Self::NOT_FOUND.to_string()],
            Response::ByAuthor { author, books } if books.is_empty() => {
                vec![format!("{}{}", Self::NO_BOOKS_BY_PREFIX, author)]
            }
            Response::ByAuthor { books, .. } => books.iter().map(Book::to_string).collect(),
            Response::Invalid => vec![Self::INVALID.to_string()],
            Response::Busy => vec![Self::BUSY.to_string()],
            Response::ReadyToAdd => vec![Self::READY_TO_ADD.to_string()],
            Response::Added => vec![Self::ADDED.to_string()],
            Response::Rejected(reason) => {
                vec![format!("{}: {}", Self::REJECTED_PREFIX, reason)]
            }
        }
    }
}
