//! The page controllers and collaborators served by the binary.

mod login;
mod static_files;
mod user;

use std::sync::Arc;

pub use login::{LoginController, INDEX_PAGE, LOGIN_PAGE, UNAUTHORIZED_PAGE};
pub use static_files::StaticFileController;
pub use user::{InMemoryUserRepository, User, UserRepository};

use crate::server::{Dispatcher, PathMatcher, ResourceLoader, ServerConfig};
use crate::session::SessionStore;

/// Build the dispatcher with the login page and the static file fallback.
pub fn application(
    config: &ServerConfig,
    users: Arc<dyn UserRepository>,
    sessions: SessionStore,
    resources: Arc<dyn ResourceLoader>,
) -> Dispatcher {
    let login = LoginController::new(users, sessions.clone(), resources.clone(), config.host.clone());

    Dispatcher::new(sessions, resources.clone())
        .route(PathMatcher::exact("/login"), login)
        .route(PathMatcher::Any, StaticFileController::new(resources))
}
