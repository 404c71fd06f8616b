//! In-process implementation of the catalog RPC service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::application::{CatalogError, CreatePortHandler, ListPortsHandler};
use crate::ports::{PortRepository, PortService, PortServiceError};
use crate::proto::v1 as proto;

/// `PortService` backed by a `PortRepository`.
pub struct PortsRpcService {
    create_handler: CreatePortHandler,
    list_handler: ListPortsHandler,
}

impl PortsRpcService {
    pub fn new(repository: Arc<dyn PortRepository>) -> Self {
        Self {
            create_handler: CreatePortHandler::new(repository.clone()),
            list_handler: ListPortsHandler::new(repository),
        }
    }
}

#[async_trait]
impl PortService for PortsRpcService {
    async fn create_port(&self, port: proto::Port) -> Result<(), PortServiceError> {
        debug!(port_id = %port.id, "create port");

        match self.create_handler.handle(port.into()).await {
            Ok(_) => Ok(()),
            Err(CatalogError::Validation(err)) => Err(PortServiceError::InvalidArgument(format!(
                "failed to create port: {err}"
            ))),
            Err(CatalogError::Storage(err)) => {
                error!(error = %err, "failed to store port");
                Err(PortServiceError::Storage(format!(
                    "failed to store port: {err}"
                )))
            }
        }
    }

    async fn get_ports(&self) -> Result<proto::PortList, PortServiceError> {
        debug!("get ports");

        let ports = self.list_handler.handle().await.map_err(|err| {
            error!(error = %err, "failed to fetch ports");
            PortServiceError::Storage(format!("failed to fetch all ports: {err}"))
        })?;

        Ok(proto::PortList {
            ports: ports.iter().map(proto::Port::from).collect(),
        })
    }
}
