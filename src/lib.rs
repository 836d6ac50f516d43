//! A minimal HTTP/1.1 server layer with cookie-based sessions.
//!
//! Each connection carries exactly one request. The request is parsed from
//! the raw stream, routed to a [`Controller`] by path, and the controller's
//! [`HttpResponse`] is serialized back to the connection. Logged-in clients
//! are recognised on later requests through the `JSESSIONID` cookie, which
//! names a [`Session`] registered in a shared [`SessionStore`].
//!
//! # Features
//!
//! - Request line, header and form body parsing from any async buffered reader
//! - A by-value response builder with deterministic header order
//! - An injectable, concurrency-safe session store
//! - Ordered path routing with 404 and 500 pages for unmatched paths and failures
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use jsession_http::{read_request, Method};
//!
//! # tokio_test_block(async {
//! let mut raw: &[u8] = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
//! let request = read_request(&mut raw).await.unwrap().unwrap();
//! assert_eq!(request.method(), Method::GET);
//! assert_eq!(request.path(), "/index.html");
//! assert_eq!(request.header("host"), Some("localhost"));
//! # });
//! # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! ## Building a response
//!
//! ```
//! use jsession_http::{HttpResponse, Session, StatusCode};
//!
//! let session = Session::new("656cef62-e3c4-40bc-a8df-94732920ed46");
//! let response = HttpResponse::new(StatusCode::Ok)
//!     .with_body("hello")
//!     .with_path("/index.html")
//!     .with_session(&session);
//!
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200 OK\r\n\
//!       Content-Length: 5\r\n\
//!       Content-Type: text/html\r\n\
//!       Set-Cookie: JSESSIONID=656cef62-e3c4-40bc-a8df-94732920ed46\r\n\
//!       \r\n\
//!       hello"
//! );
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

pub mod session;

pub mod app;

// Re-export commonly used items for convenience
pub use parser::{read_request, Error as ParserError, Headers, HttpRequest, Method, RequestLine};
pub use server::{
    Controller, Dispatcher, Error as ServerError, HttpResponse, HttpServer, PathMatcher,
    ServerConfig, StatusCode,
};
pub use session::{Attribute, Session, SessionStore};
