//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::parser::error::Error;
use crate::parser::headers::Headers;
use crate::parser::method::Method;
use crate::session::Session;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Largest body `read_request` accepts, in bytes.
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// The first line of a request: `METHOD SP PATH SP VERSION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// The request target exactly as sent, query string included.
    pub path: String,
    /// The protocol version token, empty when the client omitted it.
    pub version: String,
}

impl FromStr for RequestLine {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split(' ');
        let method = parts.next().unwrap_or_default();
        let path = parts.next().unwrap_or_default();
        if method.is_empty() || path.is_empty() {
            return Err(Error::MalformedRequestLine(line.to_string()));
        }
        let version = parts.next().unwrap_or_default();

        Ok(Self {
            method: Method::from_str(method)?,
            path: path.to_string(),
            version: version.to_string(),
        })
    }
}

/// Represents an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub line: RequestLine,
    /// Headers keyed by lowercased name, in arrival order.
    pub headers: Headers,
    /// Form parameters from the query string (GET) or the body (POST).
    pub params: HashMap<String, String>,
    pub body: Vec<u8>,
    /// The session named by the `JSESSIONID` cookie, once resolved.
    pub session: Option<Arc<Session>>,
}

impl HttpRequest {
    /// Create a request from its line and headers, deriving query parameters
    /// for GET requests.
    pub fn new(line: RequestLine, headers: Headers) -> Self {
        let params = match (line.method, line.path.split_once('?')) {
            (Method::GET, Some((_, query))) => parse_form(query.as_bytes()),
            _ => HashMap::new(),
        };

        Self {
            line,
            headers,
            params,
            body: Vec::new(),
            session: None,
        }
    }

    /// Attach a form-encoded body; its pairs are merged into `params`.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.params.extend(parse_form(&body));
        self.body = body;
        self
    }

    pub fn method(&self) -> Method {
        self.line.method
    }

    /// The request path without its query string.
    pub fn path(&self) -> &str {
        match self.line.path.split_once('?') {
            Some((path, _)) => path,
            None => &self.line.path,
        }
    }

    /// The literal request target.
    pub fn target(&self) -> &str {
        &self.line.path
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The session id carried by the `Cookie` header, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.header("cookie")?
            .split(';')
            .filter_map(|cookie| cookie.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, id)| id)
            .filter(|id| !id.is_empty())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_deref()
    }
}

/// Read one request from `reader`.
///
/// Returns `Ok(None)` when the stream ends before a request line arrives, which
/// callers treat as a normal connection close. Header lines without `": "` are
/// skipped. The body is only read for POST requests that declare a
/// `Content-Length`, which may not exceed [`DEFAULT_MAX_BODY_SIZE`].
pub async fn read_request<R>(reader: &mut R) -> Result<Option<HttpRequest>, Error>
where
    R: AsyncBufRead + Unpin,
{
    read_request_with_limit(reader, DEFAULT_MAX_BODY_SIZE).await
}

/// Like [`read_request`], rejecting bodies larger than `max_body_size` bytes
/// before reading them.
pub async fn read_request_with_limit<R>(
    reader: &mut R,
    max_body_size: usize,
) -> Result<Option<HttpRequest>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let Some(first) = read_line(reader).await? else {
        return Ok(None);
    };
    let line = RequestLine::from_str(&first)?;

    let mut headers = Headers::new();
    while let Some(header) = read_line(reader).await? {
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(": ") {
            headers.insert(name.to_ascii_lowercase(), value);
        }
    }

    let content_length = match headers.get("content-length") {
        Some(value) if line.method.has_body() => Some(
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidContentLength(value.to_string()))?,
        ),
        _ => None,
    };

    if let Some(len) = content_length.filter(|len| *len > max_body_size) {
        return Err(Error::BodyTooLarge(len, max_body_size));
    }

    let request = HttpRequest::new(line, headers);
    match content_length {
        Some(len) => {
            let mut body = vec![0; len];
            reader.read_exact(&mut body).await?;
            Ok(Some(request.with_body(body)))
        }
        None => Ok(Some(request)),
    }
}

/// Read a line without its terminator, or `None` at end of stream.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn parse_form(input: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}
