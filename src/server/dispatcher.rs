//! Routing of parsed requests to controllers.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncWrite, BufReader};

use crate::parser::{read_request_with_limit, HttpRequest, DEFAULT_MAX_BODY_SIZE};
use crate::server::error::Error;
use crate::server::handler::{Controller, PathMatcher, Route};
use crate::server::resources::ResourceLoader;
use crate::server::response::{HttpResponse, StatusCode};
use crate::session::SessionStore;

/// Page served with every 404 response.
pub const NOT_FOUND_PAGE: &str = "/404.html";
/// Page served with every 500 response.
pub const SERVER_ERROR_PAGE: &str = "/500.html";

const DEFAULT_READ_BUFFER_SIZE: usize = 8192;

/// Resolves sessions and hands each request to the first matching route.
///
/// Dispatching never fails: unmatched paths are turned into 404 responses,
/// and controller errors or panics into 500 responses.
pub struct Dispatcher {
    routes: Vec<Route>,
    sessions: SessionStore,
    resources: Arc<dyn ResourceLoader>,
    read_buffer_size: usize,
    max_body_size: usize,
}

impl Dispatcher {
    pub fn new(sessions: SessionStore, resources: Arc<dyn ResourceLoader>) -> Self {
        Self {
            routes: Vec::new(),
            sessions,
            resources,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }

    pub fn with_read_buffer_size(mut self, read_buffer_size: usize) -> Self {
        self.read_buffer_size = read_buffer_size;
        self
    }

    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Append a route. Routes are tried in the order they were added.
    pub fn route(mut self, matcher: PathMatcher, controller: impl Controller + 'static) -> Self {
        self.routes.push(Route {
            matcher,
            controller: Arc::new(controller),
        });
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Attach the session named by the request's cookie, if it is registered.
    pub async fn resolve_session(&self, request: &mut HttpRequest) {
        let Some(id) = request.session_id() else {
            return;
        };
        let session = self.sessions.get(id).await;
        if session.is_none() {
            debug!("Unknown session id {id}");
        }
        request.session = session;
    }

    /// Produce the response for one request.
    pub async fn dispatch(&self, mut request: HttpRequest) -> HttpResponse {
        self.resolve_session(&mut request).await;

        let route = self
            .routes
            .iter()
            .find(|route| route.matcher.matches(request.path()));

        let response = match route {
            Some(route) => match AssertUnwindSafe(route.controller.handle(&request))
                .catch_unwind()
                .await
            {
                Ok(Ok(response)) => response,
                Ok(Err(e @ (Error::NotFound(_) | Error::MethodNotAllowed(..)))) => {
                    debug!("{e}");
                    self.error_page(StatusCode::NotFound, NOT_FOUND_PAGE).await
                }
                Ok(Err(e)) => {
                    error!(
                        "Handler for {method} {path} failed: {e}",
                        method = request.method(),
                        path = request.path()
                    );
                    self.error_page(StatusCode::InternalServerError, SERVER_ERROR_PAGE)
                        .await
                }
                Err(panic) => {
                    error!(
                        "Handler for {method} {path} panicked: {message}",
                        method = request.method(),
                        path = request.path(),
                        message = panic_message(panic.as_ref())
                    );
                    self.error_page(StatusCode::InternalServerError, SERVER_ERROR_PAGE)
                        .await
                }
            },
            None => {
                debug!("No route for {path}", path = request.path());
                self.error_page(StatusCode::NotFound, NOT_FOUND_PAGE).await
            }
        };

        info!(
            "{method} {target} {code}",
            method = request.method(),
            target = request.target(),
            code = response.status.as_u16()
        );
        response
    }

    /// Read one request from `stream`, dispatch it and write the response.
    ///
    /// A stream that closes before sending anything is not an error. A
    /// request that cannot be parsed is logged and returned as an error
    /// without writing a response.
    pub async fn serve<S>(&self, stream: &mut S) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let parsed = {
            let mut reader = BufReader::with_capacity(self.read_buffer_size, &mut *stream);
            read_request_with_limit(&mut reader, self.max_body_size).await
        };

        let request = match parsed {
            Ok(Some(request)) => request,
            Ok(None) => {
                debug!("Connection closed before a request was sent");
                return Ok(());
            }
            Err(e) => {
                warn!("Dropping connection: {e}");
                return Err(e.into());
            }
        };

        self.dispatch(request).await.forward(stream).await
    }

    async fn error_page(&self, status: StatusCode, page: &str) -> HttpResponse {
        let body = match self.resources.read_resource(page).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error page {page} unavailable: {e}");
                status.reason_phrase().as_bytes().to_vec()
            }
        };
        HttpResponse::new(status).with_body(body).with_path(page)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
