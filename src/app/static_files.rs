//! Static resources: the fallback for every path without its own controller.

use std::sync::Arc;

use crate::parser::{HttpRequest, Method};
use crate::server::{Controller, Error, HandlerFuture, HttpResponse, ResourceLoader, StatusCode};

pub struct StaticFileController {
    resources: Arc<dyn ResourceLoader>,
}

impl StaticFileController {
    pub fn new(resources: Arc<dyn ResourceLoader>) -> Self {
        Self { resources }
    }
}

impl Controller for StaticFileController {
    fn handle<'a>(&'a self, request: &'a HttpRequest) -> HandlerFuture<'a> {
        Box::pin(async move {
            if request.method() != Method::GET {
                return Err(Error::MethodNotAllowed(request.method(), request.path().to_string()));
            }

            let path = match request.path() {
                "/" => "/index.html",
                path => path,
            };
            let body = self.resources.read_resource(path).await?;
            Ok(HttpResponse::new(StatusCode::Ok).with_body(body).with_path(path))
        })
    }
}
