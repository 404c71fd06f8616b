//! HTTP adapter for catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ErrorResponse;
pub use handlers::{CatalogHandlers, GatewayError, DEFAULT_MAX_UPLOAD_BYTES, PORTS_PART};
pub use routes::catalog_routes;
