//! Request controllers and routing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::HttpRequest;
use crate::server::{Error, HttpResponse};

/// Type alias for a boxed future that returns a Result<HttpResponse, Error>.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send + 'a>>;

/// A unit of request handling bound to one or more paths.
///
/// Implementations branch on `request.method()` themselves. Returning
/// [`Error::NotFound`] or [`Error::MethodNotAllowed`] yields a 404 page; any
/// other error yields a 500 page.
pub trait Controller: Send + Sync {
    fn handle<'a>(&'a self, request: &'a HttpRequest) -> HandlerFuture<'a>;
}

/// Decides whether a route applies to a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// The path (query string excluded) equals this value.
    Exact(String),
    /// Matches every path; used for the static file fallback.
    Any,
}

impl PathMatcher {
    pub fn exact(path: impl Into<String>) -> Self {
        PathMatcher::Exact(path.into())
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Exact(expected) => expected == path,
            PathMatcher::Any => true,
        }
    }
}

/// Represents a route in the HTTP server.
#[derive(Clone)]
pub struct Route {
    pub matcher: PathMatcher,
    pub controller: Arc<dyn Controller>,
}
