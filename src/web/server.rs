//! Web server for HobbyHub.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::{HubError, Result};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the application.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    state: AppState,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, state: AppState) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| HubError::Config(format!("invalid server address: {e}")))?;

        Ok(Self { addr, state })
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(self) -> axum::Router {
        create_router(self.state).merge(create_health_router())
    }

    /// Run the web server until it fails or is shut down.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.addr;
        let router = self.build_router();

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::io::Result<SocketAddr> {
        let addr = self.addr;
        let router = self.build_router();

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
