//! Add-book payload
//!
//! The line a client sends after the server says it is ready to add.

use crate::catalog::Book;
use crate::error::RecordError;

/// Prefix of the second line of an add-book exchange
pub const ADD_BOOK_MARKER: &str = "ADD_BOOK_REQUEST:";

/// Parse `ADD_BOOK_REQUEST:<isbn>,<title>,<author>,<price>` into a book
///
/// Fields are trimmed. Exactly four are required and the price must be a
/// finite, non-negative number.
pub fn parse_record(line: &str) -> Result<Book, RecordError> {
    let payload = line
        .strip_prefix(ADD_BOOK_MARKER)
        .ok_or(RecordError::MissingMarker)?;

    let fields: Vec<&str> = payload.split(',').map(str::trim).collect();
    let [isbn, title, author, price] = fields[..] else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let price = match price.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => p,
        _ => return Err(RecordError::InvalidPrice(price.to_string())),
    };

    Ok(Book::new(isbn, title, author, price))
}

/// Render a book as an add-book payload line
pub fn encode_record(book: &Book) -> String {
    format!(
        "{}{},{},{},{}",
        ADD_BOOK_MARKER, book.isbn, book.title, book.author, book.price
    )
}
