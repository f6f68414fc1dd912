//! Mock dashboard backend
//!
//! Serves 500 generated payments with simulated latency:
//!
//! ```text
//! cargo run --example mock_dashboard [config.yaml]
//! curl 'http://127.0.0.1:3000/payments?pageIndex=0&pageSize=50'
//! ```

use paydash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,paydash=debug")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_yaml_file(&path)?,
        None => DashboardConfig::default(),
    };

    tracing::info!(
        records = config.generator.record_count,
        latency_ms = config.service.latency_ms,
        "Starting mock dashboard backend"
    );

    ServerBuilder::from_config(&config)?
        .serve(&config.server.bind)
        .await
}
