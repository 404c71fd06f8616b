//! In-Memory Port Repository Adapter
//!
//! Holds the catalog in a `HashMap` behind a single read-write lock.
//! Upserts take the write lock for one insert; scans share the read lock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::port::Port;
use crate::ports::{PortRepository, RepositoryError};

/// In-memory port catalog
#[derive(Debug, Clone)]
pub struct InMemoryPortRepository {
    ports: Arc<RwLock<HashMap<String, Port>>>,
}

impl InMemoryPortRepository {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            ports: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored ports
    pub async fn len(&self) -> usize {
        self.ports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ports.read().await.is_empty()
    }
}

impl Default for InMemoryPortRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortRepository for InMemoryPortRepository {
    async fn upsert(&self, port: &Port) -> Result<(), RepositoryError> {
        let mut ports = self.ports.write().await;
        ports.insert(port.id().to_string(), port.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Port>, RepositoryError> {
        let ports = self.ports.read().await;
        Ok(ports.values().cloned().collect())
    }
}
