//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP method in the request is not supported.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request line is malformed (fewer than two tokens or an empty component).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The Content-Length header is not a valid byte count.
    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// The declared Content-Length exceeds the allowed body size.
    #[error("Request body of {0} bytes exceeds the limit of {1} bytes")]
    BodyTooLarge(usize, usize),

    /// Reading from the underlying stream failed.
    #[error("I/O error while reading request: {0}")]
    Io(#[from] std::io::Error),
}
