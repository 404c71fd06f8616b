//! HTTP handlers for catalog endpoints.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::TryStreamExt;
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use crate::adapters::json::PortDecoder;
use crate::application::{FetchPortsHandler, IngestError, IngestPortsHandler};
use crate::ports::PortServiceError;

use super::dto::ErrorResponse;

/// Multipart part holding the catalog document.
pub const PORTS_PART: &str = "ports";

/// Upload ceiling when none is configured: 2 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CatalogHandlers {
    ingest_handler: Arc<IngestPortsHandler>,
    fetch_handler: Arc<FetchPortsHandler>,
    shutdown: CancellationToken,
    max_upload_bytes: usize,
}

impl CatalogHandlers {
    /// Requests observe a child of `shutdown`, so ingestion runs stop when
    /// the server does.
    pub fn new(
        ingest_handler: Arc<IngestPortsHandler>,
        fetch_handler: Arc<FetchPortsHandler>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            ingest_handler,
            fetch_handler,
            shutdown,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /ports - Ingest a catalog document from the `ports` multipart part
pub async fn ingest_ports(
    State(handlers): State<CatalogHandlers>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match ingest(&handlers, &headers, multipart).await {
        Ok(ids) => (StatusCode::CREATED, Json(ids)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /ports - List the whole catalog
pub async fn list_ports(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.fetch_handler.handle().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => GatewayError::Fetch(e).into_response(),
    }
}

async fn ingest(
    handlers: &CatalogHandlers,
    headers: &HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<String>, GatewayError> {
    if let Some(actual) = content_length(headers) {
        if actual > handlers.max_upload_bytes as u64 {
            return Err(GatewayError::PayloadTooLarge {
                actual,
                limit: handlers.max_upload_bytes,
            });
        }
    }

    let mut multipart = multipart?;
    let cancel = handlers.shutdown.child_token();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PORTS_PART) {
            continue;
        }

        let chunks = field.map_err(|err| io::Error::new(io::ErrorKind::Other, err));
        let decoder = PortDecoder::new(StreamReader::new(Box::pin(chunks)));

        return Ok(handlers.ingest_handler.handle(decoder, &cancel).await?);
    }

    Err(GatewayError::MissingPart)
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Failures of the catalog endpoints.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("failed to read upload: {message}")]
    Multipart { message: String },

    #[error("missing multipart part \"ports\"")]
    MissingPart,

    #[error("upload of {actual} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { actual: u64, limit: usize },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to fetch ports: {0}")]
    Fetch(PortServiceError),

    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Internal(String),
}

impl From<MultipartRejection> for GatewayError {
    fn from(rejection: MultipartRejection) -> Self {
        GatewayError::Multipart {
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for GatewayError {
    fn from(err: MultipartError) -> Self {
        GatewayError::Multipart {
            message: err.body_text(),
        }
    }
}

impl GatewayError {
    /// Only the explicit upload ceiling is reported as a client error.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Multipart { .. }
            | GatewayError::MissingPart
            | GatewayError::Ingest(_)
            | GatewayError::Fetch(_)
            | GatewayError::Timeout(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "catalog request failed");
        } else {
            warn!(error = %self, "catalog request rejected");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
