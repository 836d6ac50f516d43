//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::server::config::ServerConfig;
use crate::server::dispatcher::Dispatcher;
use crate::server::error::Error;
use crate::server::handler::PathMatcher;
use crate::server::response::{HttpResponse, StatusCode};

/// An HTTP server handling one request per connection.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// Routes requests and owns the session store.
    pub dispatcher: Arc<Dispatcher>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig, dispatcher: Dispatcher) -> Self {
        let dispatcher = dispatcher
            .with_read_buffer_size(config.read_buffer_size)
            .with_max_body_size(config.max_body_size);
        Self {
            config,
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Log the registered routes.
    fn display_server_info(&self) {
        info!("Registered routes:");
        for route in self.dispatcher.routes() {
            match &route.matcher {
                PathMatcher::Exact(path) => info!("  {path}"),
                PathMatcher::Any => info!("  * (static resources)"),
            }
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Handle a new connection.
    fn handle_new_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        dispatcher: Arc<Dispatcher>,
        tasks: &mut JoinSet<()>,
    ) {
        // Try to acquire a permit from the semaphore
        let permit = match semaphore.try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                // Written from its own task so a slow client cannot stall accept()
                tasks.spawn(async move {
                    let response = HttpResponse::new(StatusCode::ServiceUnavailable)
                        .with_content_type("text/plain")
                        .with_body("Server is at capacity, please try again later");
                    if let Err(e) = response.forward(&mut socket).await {
                        warn!("Failed to reject connection from {addr}: {e}");
                    }
                });
                return;
            }
        };

        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = dispatcher.serve(&mut socket).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle connection errors.
    async fn handle_connection_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.setup_listener().await?;
        self.serve(listener).await
    }

    /// Accept connections on an already bound listener until Ctrl+C.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), Error> {
        self.display_server_info();

        // Create a semaphore to limit concurrent connections
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        Self::setup_ctrl_c_handler(shutdown_tx, &mut tasks);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                self.dispatcher.clone(),
                                &mut tasks,
                            );
                        }
                        Err(e) => Self::handle_connection_error(e).await,
                    }
                }

                // Reap finished connections so the set does not grow unbounded
                Some(res) = tasks.join_next(), if tasks.len() > 1 => {
                    if let Err(e) = res {
                        error!("Connection task failed: {e}");
                    }
                }
            }
        }

        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }
}
