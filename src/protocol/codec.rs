//! Line codec
//!
//! Reading and writing newline-terminated protocol lines.
//!
//! ## Framing
//! ```text
//! <line>\n
//! <line>\n
//! END_RESPONSE\n
//! ```
//! `\r\n` is accepted on input; `\n` is always written. Input bytes that
//! are not valid UTF-8 are replaced with U+FFFD rather than failing the read.

use std::io::{BufRead, Read, Write};

use super::{Request, Response};
use crate::error::{BookstoreError, Result};

/// Sentinel line closing every response
pub const END_RESPONSE: &str = "END_RESPONSE";

/// Longest accepted input line in bytes, terminator excluded (8 KB)
pub const MAX_LINE_LEN: usize = 8 * 1024;

// =============================================================================
// Server side
// =============================================================================

/// Read one line, without its terminator
///
/// Returns `Ok(None)` once the peer has closed its side of the stream.
/// A line longer than [`MAX_LINE_LEN`] is discarded up to its newline and
/// reported as [`BookstoreError::LineTooLong`]; the stream stays usable.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    // +2 leaves room for a trailing "\r\n"
    let limit = (MAX_LINE_LEN + 2) as u64;
    if reader.by_ref().take(limit).read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if buf.len() as u64 == limit {
        skip_line(reader)?;
        return Err(BookstoreError::LineTooLong(MAX_LINE_LEN));
    }

    if buf.len() > MAX_LINE_LEN {
        return Err(BookstoreError::LineTooLong(MAX_LINE_LEN));
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Discard input up to and including the next newline (or end of stream)
fn skip_line<R: BufRead>(reader: &mut R) -> Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

/// Write a response followed by the sentinel line, then flush
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    for line in response.lines() {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer, "{}", END_RESPONSE)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Client side
// =============================================================================

/// Write a request line, then flush
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    write_line(writer, &request.to_string())
}

/// Write a raw line (e.g. an add-book payload), then flush
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}

/// Read response lines up to (not including) the sentinel
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        match read_line(reader)? {
            Some(line) if line == END_RESPONSE => return Ok(lines),
            Some(line) => lines.push(line),
            None => {
                return Err(BookstoreError::Protocol(format!(
                    "stream closed before {} ({} lines read)",
                    END_RESPONSE,
                    lines.len()
                )))
            }
        }
    }
}
