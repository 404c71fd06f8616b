//! Catalog handlers - validate and store ports, list the catalog.

mod create_port;
mod list_ports;

pub use create_port::{CreatePortCommand, CreatePortHandler};
pub use list_ports::ListPortsHandler;

use crate::domain::foundation::ValidationError;
use crate::ports::RepositoryError;

/// Errors raised by catalog handlers.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
