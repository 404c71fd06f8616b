//! Ports service: owns the in-memory catalog and serves it over RPC.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use port_catalog::adapters::memory::InMemoryPortRepository;
use port_catalog::adapters::rpc::{serve, PortsRpcService};
use port_catalog::config::AppConfig;
use port_catalog::lifecycle::cancel_on_signal;
use port_catalog::observability::{init_logging, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_validated().context("failed to load configuration")?;

    init_logging(
        LogFormat::from(&config.server.environment),
        &config.server.log_level,
    );

    let repository = Arc::new(InMemoryPortRepository::new());
    let service = Arc::new(PortsRpcService::new(repository));

    let addr = config.rpc.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "ports service listening");

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    serve(
        listener,
        service,
        shutdown,
        Duration::from_secs(config.rpc.shutdown_grace_secs),
    )
    .await
    .context("ports service failed")?;

    Ok(())
}
