//! FetchPortsHandler - Reads the whole catalog through the port service.

use std::sync::Arc;

use tracing::debug;

use crate::ports::{PortEntry, PortService, PortServiceError};

pub struct FetchPortsHandler {
    port_service: Arc<dyn PortService>,
}

impl FetchPortsHandler {
    pub fn new(port_service: Arc<dyn PortService>) -> Self {
        Self { port_service }
    }

    pub async fn handle(&self) -> Result<Vec<PortEntry>, PortServiceError> {
        let list = self.port_service.get_ports().await?;
        debug!(count = list.ports.len(), "fetched ports");
        Ok(list.ports.into_iter().map(PortEntry::from).collect())
    }
}
