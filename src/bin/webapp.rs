//! Web app: accepts catalog uploads and forwards them to the ports service.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use port_catalog::adapters::http::{gateway_router, CatalogHandlers};
use port_catalog::adapters::rpc::RemotePortService;
use port_catalog::application::{FetchPortsHandler, IngestPortsHandler};
use port_catalog::config::AppConfig;
use port_catalog::lifecycle::cancel_on_signal;
use port_catalog::observability::{init_logging, LogFormat};
use port_catalog::ports::PortService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_validated().context("failed to load configuration")?;

    init_logging(
        LogFormat::from(&config.server.environment),
        &config.server.log_level,
    );

    let port_service: Arc<dyn PortService> = Arc::new(
        RemotePortService::new(
            config.rpc.ports_service_url.clone(),
            Duration::from_secs(config.rpc.request_timeout_secs),
        )
        .context("failed to create ports service client")?,
    );

    let shutdown = CancellationToken::new();
    let handlers = CatalogHandlers::new(
        Arc::new(IngestPortsHandler::new(port_service.clone())),
        Arc::new(FetchPortsHandler::new(port_service)),
        shutdown.clone(),
    )
    .with_max_upload_bytes(config.server.max_upload_bytes);
    let app = gateway_router(
        handlers,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, ports_service = %config.rpc.ports_service_url, "web app listening");

    tokio::spawn(cancel_on_signal(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("web app failed")?;

    info!("web app stopped");
    Ok(())
}
