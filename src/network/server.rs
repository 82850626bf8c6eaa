//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::store::CustomerStore;

use super::handlers::AppState;
use super::routes::create_router;

/// HTTP server for the customer store
pub struct Server {
    /// Server configuration
    config: Config,

    /// Store shared with every request handler
    store: Arc<CustomerStore>,

    /// Bound listener, ready to accept
    listener: TcpListener,
}

impl Server {
    /// Validate the config and bind the listen address
    pub async fn bind(config: Config, store: Arc<CustomerStore>) -> Result<Self> {
        config.validate()?;
        let listener = TcpListener::bind(config.socket_addr()?).await?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            config,
            store,
            listener,
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Build the router over this server's store
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            store: Arc::clone(&self.store),
        });
        create_router(state, &self.config)
    }

    /// Serve until the process is stopped
    pub async fn run(self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Serve until `shutdown` completes, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
