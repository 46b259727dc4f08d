//! Protocol Module
//!
//! Defines the line-based text protocol between clients and the server.
//!
//! ## Request Lines (client → server)
//! ```text
//! CHECK_ISBN:<isbn>
//! CHECK_TITLE:<title>
//! CHECK_BOOKS_BY_AUTHOR:<author>
//! TRY_ADD_BOOK:
//! ADD_BOOK_REQUEST:<isbn>,<title>,<author>,<price>   (only after "ready")
//! SALIR                                               (exit, any suffix)
//! ```
//!
//! ## Response Lines (server → client)
//! One or more text lines, always terminated by a literal `END_RESPONSE`
//! line. The exit command gets no reply at all.

mod command;
mod record;
mod response;
mod codec;

pub use command::Request;
pub use record::{encode_record, parse_record, ADD_BOOK_MARKER};
pub use response::Response;
pub use codec::{
    read_line, read_response, write_line, write_request, write_response, END_RESPONSE,
    MAX_LINE_LEN,
};
