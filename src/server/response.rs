//! HTTP response types and utilities.

use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::parser::{Headers, SESSION_COOKIE};
use crate::server::content_type::content_type_for;
use crate::server::error::Error;
use crate::session::Session;

/// HTTP status codes with their standard reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    Found = 302,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    InternalServerError = 500,
    ServiceUnavailable = 503,
}

impl StatusCode {
    /// The numeric status code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }
}

/// Represents an HTTP response.
///
/// Built by value: every `with_*` call consumes the response and returns the
/// updated one. Headers are written in the order they were first set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, in insertion order
    pub headers: Headers,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Set the body and its `Content-Length` (in bytes).
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        let content_length = self.body.len().to_string();
        self.with_header("Content-Length", content_length)
    }

    /// Derive `Content-Type` from the extension of `path`.
    ///
    /// The path itself is not written to the response.
    pub fn with_path(self, path: &str) -> Self {
        self.with_content_type(content_type_for(path))
    }

    /// Redirect to `path` on `host` through an absolute `Location`.
    pub fn with_redirect(self, host: &str, path: &str) -> Self {
        self.with_header("Location", format!("http://{host}{path}"))
    }

    /// Hand the session id to the client as the `JSESSIONID` cookie.
    pub fn with_session(self, session: &Session) -> Self {
        self.with_header("Set-Cookie", format!("{SESSION_COOKIE}={}", session.id()))
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        let status_line = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in self.headers.iter() {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }

    /// Write the response to `sink` and flush it.
    ///
    /// Consumes the response. The sink is left open; closing the connection
    /// is up to the caller.
    pub async fn forward<W>(self, sink: &mut W) -> Result<(), Error>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        sink.write_all(&self.to_bytes()).await?;
        sink.flush().await?;
        debug!("Sent {} {}", self.status.as_u16(), self.status.reason_phrase());
        Ok(())
    }
}
