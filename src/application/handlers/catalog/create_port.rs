//! CreatePortHandler - Command handler for storing a port.

use std::sync::Arc;

use tracing::debug;

use super::CatalogError;
use crate::domain::port::Port;
use crate::ports::PortRepository;

/// Command to create or replace a port.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePortCommand {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub alias: Vec<String>,
    pub regions: Vec<String>,
    pub coordinates: Vec<f64>,
    pub province: String,
    pub timezone: String,
    pub unlocs: Vec<String>,
    pub code: String,
}

/// Handler for creating ports.
///
/// Validation happens once, here, when the command becomes a `Port`.
pub struct CreatePortHandler {
    repository: Arc<dyn PortRepository>,
}

impl CreatePortHandler {
    pub fn new(repository: Arc<dyn PortRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreatePortCommand) -> Result<Port, CatalogError> {
        debug!(port_id = %cmd.id, "creating port");

        let port = Port::new(
            cmd.id,
            cmd.name,
            cmd.city,
            cmd.country,
            cmd.alias,
            cmd.regions,
            cmd.coordinates,
            cmd.province,
            cmd.timezone,
            cmd.unlocs,
            cmd.code,
        )?;

        self.repository.upsert(&port).await?;

        Ok(port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortRepository;
    use crate::domain::foundation::ValidationError;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl PortRepository for FailingRepository {
        async fn upsert(&self, _port: &Port) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("simulated failure".to_string()))
        }

        async fn scan(&self) -> Result<Vec<Port>, RepositoryError> {
            Ok(vec![])
        }
    }

    fn valid_command() -> CreatePortCommand {
        CreatePortCommand {
            id: "AEAJM".to_string(),
            name: "Ajman".to_string(),
            coordinates: vec![55.5136433, 25.4052165],
            code: "52000".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stores_valid_port() {
        let repository = Arc::new(InMemoryPortRepository::new());
        let handler = CreatePortHandler::new(repository.clone());

        let port = handler.handle(valid_command()).await.unwrap();

        assert_eq!(port.id(), "AEAJM");
        assert_eq!(repository.scan().await.unwrap(), vec![port]);
    }

    #[tokio::test]
    async fn rejects_port_without_code_and_stores_nothing() {
        let repository = Arc::new(InMemoryPortRepository::new());
        let handler = CreatePortHandler::new(repository.clone());

        let cmd = CreatePortCommand {
            code: String::new(),
            ..valid_command()
        };
        let err = handler.handle(cmd).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::EmptyField { field: "code" })
        ));
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn propagates_storage_failure() {
        let handler = CreatePortHandler::new(Arc::new(FailingRepository));

        let err = handler.handle(valid_command()).await.unwrap_err();

        assert!(matches!(err, CatalogError::Storage(_)));
    }
}
