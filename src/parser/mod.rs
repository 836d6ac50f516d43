//! HTTP parser module.
//!
//! Reads a single request (request line, headers and an optional form body)
//! from any buffered async reader.

mod error;
mod headers;
mod method;
mod request;
mod tests;

// Re-export public items
pub use error::Error;
pub use headers::Headers;
pub use method::Method;
pub use request::{HttpRequest, RequestLine, DEFAULT_MAX_BODY_SIZE, SESSION_COOKIE};

// Re-export the read_request functions
pub use request::{read_request, read_request_with_limit};
