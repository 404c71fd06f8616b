//! Port Repository - Interface for storing the port catalog.
//!
//! The catalog is keyed by port id with last-writer-wins semantics.
//! Implementations must be safe for many concurrent upserts and scans.

use async_trait::async_trait;

use crate::domain::port::Port;

/// Errors that can occur during repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Backend failure. Never produced by the in-memory catalog.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Port for the port catalog store
#[async_trait]
pub trait PortRepository: Send + Sync {
    /// Insert the port if its id is new, otherwise replace the stored port.
    ///
    /// The write is atomic: a concurrent `scan` sees either the old or the
    /// new value, never a mix of both.
    async fn upsert(&self, port: &Port) -> Result<(), RepositoryError>;

    /// Return every stored port.
    ///
    /// Order is unspecified and may differ between calls.
    async fn scan(&self) -> Result<Vec<Port>, RepositoryError>;
}
