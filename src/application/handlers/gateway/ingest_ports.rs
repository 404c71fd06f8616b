//! IngestPortsHandler - Streams catalog entries into the port service.
//!
//! Entries are pulled from a [`PortEntrySource`] and forwarded one at a time
//! in document order. The first failure
//! aborts the run; ports forwarded before it stay stored.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::ports::{DecodeError, PortEntrySource, PortService, PortServiceError};
use crate::proto::v1 as proto;

/// Reasons an ingestion run stops early.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Malformed(#[from] DecodeError),

    #[error("failed to create port {id}: {source}")]
    Rejected {
        id: String,
        #[source]
        source: PortServiceError,
    },

    #[error("ingestion cancelled")]
    Cancelled,
}

/// Handler for ingestion runs.
pub struct IngestPortsHandler {
    port_service: Arc<dyn PortService>,
}

impl IngestPortsHandler {
    pub fn new(port_service: Arc<dyn PortService>) -> Self {
        Self { port_service }
    }

    /// Drain `entries` to the end, forwarding every entry.
    ///
    /// Returns the accepted ids in document order.
    pub async fn handle<S>(
        &self,
        entries: S,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, IngestError>
    where
        S: PortEntrySource,
    {
        let run_id = Uuid::new_v4();
        self.run(entries, cancel)
            .instrument(info_span!("ingest_ports", %run_id))
            .await
    }

    async fn run<S>(
        &self,
        mut entries: S,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, IngestError>
    where
        S: PortEntrySource,
    {
        let mut accepted = Vec::new();

        loop {
            if cancel.is_cancelled() {
                return Err(abort(IngestError::Cancelled, &accepted));
            }

            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(IngestError::Cancelled),
                next = entries.next_entry() => next.map_err(IngestError::from),
            };
            let entry = match next {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => return Err(abort(err, &accepted)),
            };

            let id = entry.id.clone();
            debug!(port_id = %id, "forwarding port");

            let created = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(IngestError::Cancelled),
                created = self.port_service.create_port(proto::Port::from(entry)) => {
                    created.map_err(|source| IngestError::Rejected {
                        id: id.clone(),
                        source,
                    })
                }
            };
            if let Err(err) = created {
                return Err(abort(err, &accepted));
            }

            accepted.push(id);
        }

        info!(accepted = accepted.len(), "ingestion completed");
        Ok(accepted)
    }
}

fn abort(err: IngestError, accepted: &[String]) -> IngestError {
    warn!(accepted = accepted.len(), error = %err, "ingestion aborted");
    err
}
