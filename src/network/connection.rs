//! Connection Session
//!
//! Serves one client: reads request lines, answers each one, repeats.
//!
//! ## States
//! ```text
//! AWAITING_COMMAND ──line──► dispatch ──► AWAITING_COMMAND
//!        │
//!        └── SALIR / end of stream / I/O error ──► CLOSED
//! ```

use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::net::TcpStream;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::{BookstoreError, Result};
use crate::protocol::{parse_record, read_line, write_response, Request, Response};

/// Handles a single client connection
pub struct Session<R, W> {
    /// Request side (buffered, line oriented)
    reader: R,

    /// Response side
    writer: W,

    /// Catalog shared by every session
    catalog: Arc<Catalog>,

    /// Peer address for logging
    peer_addr: String,
}

impl Session<BufReader<TcpStream>, BufWriter<TcpStream>> {
    /// Create a session over an accepted TCP stream
    pub fn from_stream(stream: TcpStream, catalog: Arc<Catalog>, nodelay: bool) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        if nodelay {
            stream.set_nodelay(true)?;
        }

        let read_stream = stream.try_clone()?;
        Ok(Self::new(
            BufReader::new(read_stream),
            BufWriter::new(stream),
            catalog,
            peer_addr,
        ))
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, catalog: Arc<Catalog>, peer_addr: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            catalog,
            peer_addr: peer_addr.into(),
        }
    }

    /// Serve the client until it exits or disconnects (blocking)
    ///
    /// A peer that resets or aborts the connection is a normal close, not
    /// an error.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Session started for {}", self.peer_addr);

        match self.serve() {
            Err(BookstoreError::Io(ref e))
                if matches!(
                    e.kind(),
                    ErrorKind::ConnectionReset
                        | ErrorKind::ConnectionAborted
                        | ErrorKind::BrokenPipe
                        | ErrorKind::UnexpectedEof
                ) =>
            {
                tracing::debug!("Client {} dropped the connection: {}", self.peer_addr, e);
                Ok(())
            }
            other => other,
        }
    }

    fn serve(&mut self) -> Result<()> {
        loop {
            let line = match read_line(&mut self.reader) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::debug!("Client {} closed the stream", self.peer_addr);
                    return Ok(());
                }
                Err(BookstoreError::LineTooLong(limit)) => {
                    tracing::warn!("Client {} sent a line over {} bytes", self.peer_addr, limit);
                    write_response(&mut self.writer, &Response::Invalid)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let request = Request::parse(&line);
            tracing::trace!("Received request from {}: {:?}", self.peer_addr, request);

            let response = match request {
                Request::Exit => {
                    tracing::debug!("Client {} sent exit", self.peer_addr);
                    return Ok(());
                }
                Request::TryAddBook => match self.add_book()? {
                    Some(response) => response,
                    None => return Ok(()),
                },
                Request::CheckIsbn(isbn) => self
                    .catalog
                    .find_by_isbn(&isbn)
                    .map_or(Response::NotFound, Response::Found),
                Request::CheckTitle(title) => self
                    .catalog
                    .find_by_title(&title)
                    .map_or(Response::NotFound, Response::Found),
                Request::CheckBooksByAuthor(author) => {
                    let books = self.catalog.find_by_author(&author);
                    Response::ByAuthor { author, books }
                }
                Request::Unknown(line) => {
                    tracing::debug!("Invalid request from {}: {:?}", self.peer_addr, line);
                    Response::Invalid
                }
            };

            write_response(&mut self.writer, &response)?;
        }
    }

    /// Run the two-step add-book exchange
    ///
    /// Returns `Ok(None)` if the client closed the stream while we were
    /// waiting for the payload. The Write Guard is scoped to this call and
    /// is released before the final response goes out.
    fn add_book(&mut self) -> Result<Option<Response>> {
        let catalog = Arc::clone(&self.catalog);
        let Some(guard) = catalog.try_begin_write() else {
            tracing::debug!("Write Guard busy, turning away {}", self.peer_addr);
            return Ok(Some(Response::Busy));
        };
        tracing::debug!("Write Guard acquired by {}", self.peer_addr);

        write_response(&mut self.writer, &Response::ReadyToAdd)?;

        let record = match read_line(&mut self.reader) {
            Ok(Some(line)) => parse_record(&line).map_err(|e| e.to_string()),
            Ok(None) => {
                tracing::debug!("Client {} closed the stream mid add-book", self.peer_addr);
                return Ok(None);
            }
            Err(e @ BookstoreError::LineTooLong(_)) => Err(e.to_string()),
            Err(e) => return Err(e),
        };

        let response = match record {
            Ok(book) => {
                tracing::info!("Client {} added book {}", self.peer_addr, book.isbn);
                guard.append(book);
                Response::Added
            }
            Err(e) => {
                tracing::warn!("Rejected book from {}: {}", self.peer_addr, e);
                Response::Rejected(e)
            }
        };

        drop(guard);
        tracing::debug!("Write Guard released by {}", self.peer_addr);

        Ok(Some(response))
    }

    /// Consume the session, returning its writer (for inspecting output)
    pub fn into_writer(self) -> W {
        self.writer
    }
}
