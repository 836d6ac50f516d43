//! The `/login` page.

use std::sync::Arc;

use log::info;

use crate::parser::{HttpRequest, Method};
use crate::server::{
    Controller, Error, HandlerFuture, HttpResponse, ResourceLoader, StatusCode,
};
use crate::session::{Session, SessionStore};
use crate::app::user::UserRepository;

pub const LOGIN_PAGE: &str = "/login.html";
pub const UNAUTHORIZED_PAGE: &str = "/401.html";
/// Where logged-in users are sent.
pub const INDEX_PAGE: &str = "/index.html";

/// Renders the login form and authenticates submitted credentials.
///
/// A successful POST creates a session, registers it in the store and sets
/// the `JSESSIONID` cookie. A GET from a client that already holds a session
/// with a user is redirected to the index page.
pub struct LoginController {
    users: Arc<dyn UserRepository>,
    sessions: SessionStore,
    resources: Arc<dyn ResourceLoader>,
    host: String,
}

impl LoginController {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: SessionStore,
        resources: Arc<dyn ResourceLoader>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            users,
            sessions,
            resources,
            host: host.into(),
        }
    }

    async fn show_form(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        if request.session().and_then(Session::user).is_some() {
            return Ok(HttpResponse::new(StatusCode::Found).with_redirect(&self.host, INDEX_PAGE));
        }

        let body = self.resources.read_resource(LOGIN_PAGE).await?;
        Ok(HttpResponse::new(StatusCode::Ok)
            .with_body(body)
            .with_path(LOGIN_PAGE))
    }

    async fn log_in(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let account = request.param("account").unwrap_or_default();
        let password = request.param("password").unwrap_or_default();

        let user = self
            .users
            .find_by_account(account)
            .filter(|user| user.check_password(password));

        let Some(user) = user else {
            info!("Rejected login for account {account:?}");
            let body = self.resources.read_resource(UNAUTHORIZED_PAGE).await?;
            return Ok(HttpResponse::new(StatusCode::Unauthorized)
                .with_body(body)
                .with_path(UNAUTHORIZED_PAGE));
        };

        let session = self.sessions.add(Session::for_user(user)).await;
        info!("Account {account:?} logged in");

        Ok(HttpResponse::new(StatusCode::Found)
            .with_redirect(&self.host, INDEX_PAGE)
            .with_session(&session))
    }
}

impl Controller for LoginController {
    fn handle<'a>(&'a self, request: &'a HttpRequest) -> HandlerFuture<'a> {
        Box::pin(async move {
            match request.method() {
                Method::GET => self.show_form(request).await,
                Method::POST => self.log_in(request).await,
                method => Err(Error::MethodNotAllowed(method, request.path().to_string())),
            }
        })
    }
}
