//! Gateway handlers - stream uploaded documents into the catalog service and
//! read the catalog back.

mod fetch_ports;
mod ingest_ports;

pub use fetch_ports::FetchPortsHandler;
pub use ingest_ports::{IngestError, IngestPortsHandler};
