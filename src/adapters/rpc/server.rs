//! Network side of the catalog RPC service.
//!
//! Every method is a `POST` of an encoded request message; the reply is the
//! encoded response with `200`, or an encoded `Status` with a non-2xx code.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use prost::Message;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::ports::{Code, PortService, PortServiceError};
use crate::proto::v1 as proto;

/// Status used for cancelled calls; has no named constant.
const CLIENT_CLOSED_REQUEST: u16 = 499;

/// Build the RPC router for `service`.
pub fn rpc_router(service: Arc<dyn PortService>) -> Router {
    Router::new()
        .route(proto::CREATE_PORT_PATH, post(create_port))
        .route(proto::GET_PORTS_PATH, post(get_ports))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve `service` on `listener` until `shutdown` fires.
///
/// Open connections get `grace` to drain before the server is dropped.
pub async fn serve(
    listener: TcpListener,
    service: Arc<dyn PortService>,
    shutdown: CancellationToken,
    grace: Duration,
) -> std::io::Result<()> {
    let signal = shutdown.clone();
    let server = axum::serve(listener, rpc_router(service))
        .with_graceful_shutdown(async move { signal.cancelled().await })
        .into_future();

    tokio::select! {
        result = server => {
            info!("rpc server stopped");
            result
        }
        _ = async {
            shutdown.cancelled().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_secs = grace.as_secs(), "rpc server did not drain in time, forcing stop");
            Ok(())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

async fn create_port(State(service): State<Arc<dyn PortService>>, body: Bytes) -> Response {
    let port = match proto::Port::decode(body) {
        Ok(port) => port,
        Err(err) => {
            return status_response(&PortServiceError::InvalidArgument(format!(
                "malformed request: {err}"
            )))
        }
    };

    match service.create_port(port).await {
        Ok(()) => message_response(&proto::Empty {}),
        Err(err) => status_response(&err),
    }
}

async fn get_ports(State(service): State<Arc<dyn PortService>>, body: Bytes) -> Response {
    if let Err(err) = proto::Empty::decode(body) {
        return status_response(&PortServiceError::InvalidArgument(format!(
            "malformed request: {err}"
        )));
    }

    match service.get_ports().await {
        Ok(list) => message_response(&list),
        Err(err) => status_response(&err),
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// ════════════════════════════════════════════════════════════════════════════════
// Encoding
// ════════════════════════════════════════════════════════════════════════════════

fn message_response<M: Message>(message: &M) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, proto::CONTENT_TYPE)],
        message.encode_to_vec(),
    )
        .into_response()
}

fn status_response(err: &PortServiceError) -> Response {
    let code = err.code();
    if code != Code::InvalidArgument {
        warn!(error = %err, "rpc call failed");
    }

    let status = proto::Status {
        code: code.as_i32(),
        message: err.message(),
    };
    (
        http_status(code),
        [(header::CONTENT_TYPE, proto::CONTENT_TYPE)],
        status.encode_to_vec(),
    )
        .into_response()
}

fn http_status(code: Code) -> StatusCode {
    match code {
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::Cancelled => StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::Internal | Code::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
