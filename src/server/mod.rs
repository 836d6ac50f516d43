//! HTTP server implementation.
//!
//! Builds responses, maps paths to controllers and drives one
//! request/response cycle per accepted connection.

mod config;
mod content_type;
mod dispatcher;
mod error;
mod handler;
mod http_server;
mod resources;
mod response;

// Re-export public items
pub use config::ServerConfig;
pub use content_type::{content_type_for, DEFAULT_CONTENT_TYPE};
pub use dispatcher::{Dispatcher, NOT_FOUND_PAGE, SERVER_ERROR_PAGE};
pub use error::Error;
pub use handler::{Controller, HandlerFuture, PathMatcher, Route};
pub use http_server::HttpServer;
pub use resources::{FileResourceLoader, MemoryResources, ResourceFuture, ResourceLoader};
pub use response::{HttpResponse, StatusCode};
