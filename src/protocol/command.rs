//! Request definitions
//!
//! A request line is parsed exactly once into a tagged variant.

use std::fmt;

const CHECK_ISBN: &str = "CHECK_ISBN:";
const CHECK_TITLE: &str = "CHECK_TITLE:";
const CHECK_BOOKS_BY_AUTHOR: &str = "CHECK_BOOKS_BY_AUTHOR:";
const TRY_ADD_BOOK: &str = "TRY_ADD_BOOK:";
const EXIT: &str = "SALIR";

/// A parsed client request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Exact-match lookup by ISBN
    CheckIsbn(String),

    /// Case-insensitive lookup by title
    CheckTitle(String),

    /// Case-insensitive lookup of every book by an author (trimmed)
    CheckBooksByAuthor(String),

    /// Start the two-step add-book exchange
    TryAddBook,

    /// Close the session
    Exit,

    /// Anything else, kept verbatim for logging
    Unknown(String),
}

impl Request {
    /// Parse one request line (without its line terminator)
    pub fn parse(line: &str) -> Self {
        if line.starts_with(EXIT) {
            Request::Exit
        } else if let Some(isbn) = line.strip_prefix(CHECK_ISBN) {
            Request::CheckIsbn(isbn.to_string())
        } else if let Some(title) = line.strip_prefix(CHECK_TITLE) {
            Request::CheckTitle(title.to_string())
        } else if let Some(author) = line.strip_prefix(CHECK_BOOKS_BY_AUTHOR) {
            Request::CheckBooksByAuthor(author.trim().to_string())
        } else if line.starts_with(TRY_ADD_BOOK) {
            Request::TryAddBook
        } else {
            Request::Unknown(line.to_string())
        }
    }
}

/// Renders the request as it travels on the wire
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::CheckIsbn(isbn) => write!(f, "{}{}", CHECK_ISBN, isbn),
            Request::CheckTitle(title) => write!(f, "{}{}", CHECK_TITLE, title),
            Request::CheckBooksByAuthor(author) => {
                write!(f, "{}{}", CHECK_BOOKS_BY_AUTHOR, author)
            }
            Request::TryAddBook => f.write_str(TRY_ADD_BOOK),
            Request::Exit => f.write_str(EXIT),
            Request::Unknown(line) => f.write_str(line),
        }
    }
}
