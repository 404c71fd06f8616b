//! ListPortsHandler - Query handler returning the whole catalog.

use std::sync::Arc;

use tracing::debug;

use super::CatalogError;
use crate::domain::port::Port;
use crate::ports::PortRepository;

/// Handler for listing the catalog. No pagination.
pub struct ListPortsHandler {
    repository: Arc<dyn PortRepository>,
}

impl ListPortsHandler {
    pub fn new(repository: Arc<dyn PortRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Port>, CatalogError> {
        debug!("fetching list of ports");
        Ok(self.repository.scan().await?)
    }
}
