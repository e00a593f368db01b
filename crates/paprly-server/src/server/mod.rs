//! HTTP server.

pub mod transport;

use std::net::SocketAddr;

use crate::config::Config;
use crate::handlers::AppContext;

/// Paprly HTTP server.
pub struct PaprlyServer {
    /// Handler context.
    ctx: AppContext,

    /// Origin allowed through CORS.
    cors_origin: String,
}

impl PaprlyServer {
    /// Create a server from configuration, constructing the upstream clients.
    ///
    /// # Errors
    ///
    /// Returns error if an HTTP client cannot be initialized.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::with_context(AppContext::from_config(config)?, config.cors_origin.clone()))
    }

    /// Create a server around an existing context.
    #[must_use]
    pub fn with_context(ctx: AppContext, cors_origin: String) -> Self {
        Self { ctx, cors_origin }
    }

    /// Handler context.
    #[must_use]
    pub const fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let router = transport::create_router(self.ctx, &self.cors_origin);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!(cors_origin = %self.cors_origin, "HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for PaprlyServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaprlyServer")
            .field("ctx", &self.ctx)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
