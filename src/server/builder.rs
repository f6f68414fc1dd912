//! ServerBuilder for fluent API to build HTTP servers

use super::rest::{PaymentsState, RestExposure};
use crate::config::DashboardConfig;
use crate::core::{Payment, RecordService};
use crate::mock::PaymentGenerator;
use crate::storage::InMemoryRecordService;
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the dashboard backend's HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_service(InMemoryRecordService::new(payments))
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn RecordService<Payment>>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Generate the backing collection and service described by `config`
    ///
    /// The collection is generated here, once, and owned by the service for
    /// the lifetime of the server.
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let generator = PaymentGenerator::new(config.generator.clone())?;
        let payments = generator.generate_with_entropy();
        let service = InMemoryRecordService::new(payments).with_latency(config.service.latency());

        Ok(Self::new().with_service(service))
    }

    /// Set the record service (required)
    pub fn with_service(mut self, service: impl RecordService<Payment> + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let service = self
            .service
            .ok_or_else(|| anyhow!("A record service is required"))?;

        let state = PaymentsState { service };
        let app = RestExposure::build_router(state, self.custom_routes);

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
