//! HTTP adapters - REST API of the web app.

pub mod catalog;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    response::{IntoResponse, Response},
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;

pub use catalog::{catalog_routes, CatalogHandlers, ErrorResponse, GatewayError};

/// Build the public router of the web app.
///
/// Every request is bounded by `request_timeout`; a request that runs past it
/// is dropped, including any RPC still in flight, and answered with `500` and
/// an `error_message` body.
pub fn gateway_router(handlers: CatalogHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .merge(catalog_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    timeout_response(err, request_timeout)
                }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}

fn timeout_response(err: BoxError, request_timeout: Duration) -> Response {
    if err.is::<Elapsed>() {
        GatewayError::Timeout(request_timeout).into_response()
    } else {
        GatewayError::Internal(err.to_string()).into_response()
    }
}
