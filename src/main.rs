//! Runs the login demo server.
//!
//! Usage: `jsession-http [config.json]`. Without a config file the server
//! listens on 127.0.0.1:8080 and serves pages from `./static`.

use std::sync::Arc;

use jsession_http::app::{self, InMemoryUserRepository};
use jsession_http::server::FileResourceLoader;
use jsession_http::{HttpServer, ServerConfig, ServerError, SessionStore};
use log::info;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {path}");
            ServerConfig::load(path).await?
        }
        None => ServerConfig::default(),
    };

    let users = match &config.users_file {
        Some(path) => InMemoryUserRepository::load(path).await?,
        None => InMemoryUserRepository::default(),
    };
    let users = Arc::new(users);
    let resources = Arc::new(FileResourceLoader::new(config.resource_root.clone()));
    let dispatcher = app::application(&config, users, SessionStore::new(), resources);

    HttpServer::new(config, dispatcher).start().await
}
