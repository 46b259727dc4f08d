//! Blocking protocol client
//!
//! Speaks the line protocol over a single TCP connection. Used by the CLI
//! binary and the end-to-end tests.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::catalog::Book;
use crate::error::{BookstoreError, Result};
use crate::protocol::{encode_record, read_response, write_line, write_request, Request, Response};

/// Outcome of an add-book exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Busy,
    Rejected(String),
}

/// A connected client
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        let read_stream = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
        })
    }

    /// Send any request and collect its response lines
    pub fn request(&mut self, request: &Request) -> Result<Vec<String>> {
        write_request(&mut self.writer, request)?;
        read_response(&mut self.reader)
    }

    pub fn check_isbn(&mut self, isbn: &str) -> Result<Vec<String>> {
        self.request(&Request::CheckIsbn(isbn.to_string()))
    }

    pub fn check_title(&mut self, title: &str) -> Result<Vec<String>> {
        self.request(&Request::CheckTitle(title.to_string()))
    }

    pub fn books_by_author(&mut self, author: &str) -> Result<Vec<String>> {
        self.request(&Request::CheckBooksByAuthor(author.to_string()))
    }

    /// Start an add-book exchange
    ///
    /// Returns `Ok(true)` if the server is now waiting for the payload
    /// line, `Ok(false)` if another client holds the Write Guard.
    pub fn try_add(&mut self) -> Result<bool> {
        let lines = self.request(&Request::TryAddBook)?;
        match lines.first().map(String::as_str) {
            Some(Response::READY_TO_ADD) => Ok(true),
            Some(Response::BUSY) => Ok(false),
            other => Err(BookstoreError::Protocol(format!(
                "unexpected reply to {}: {:?}",
                Request::TryAddBook,
                other
            ))),
        }
    }

    /// Send a raw payload line after a successful [`Client::try_add`]
    pub fn send_payload(&mut self, line: &str) -> Result<Vec<String>> {
        write_line(&mut self.writer, line)?;
        read_response(&mut self.reader)
    }

    /// Run the whole add-book exchange for `book`
    pub fn add_book(&mut self, book: &Book) -> Result<AddOutcome> {
        if !self.try_add()? {
            return Ok(AddOutcome::Busy);
        }

        let lines = self.send_payload(&encode_record(book))?;
        match lines.first() {
            Some(line) if line == Response::ADDED => Ok(AddOutcome::Added),
            Some(line) => Ok(AddOutcome::Rejected(line.clone())),
            None => Err(BookstoreError::Protocol(
                "empty reply to add-book payload".to_string(),
            )),
        }
    }

    /// Send the exit command; the server closes without replying
    pub fn quit(mut self) -> Result<()> {
        write_request(&mut self.writer, &Request::Exit)
    }
}
