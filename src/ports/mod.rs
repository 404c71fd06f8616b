//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PortRepository` - Storage of the port catalog
//! - `PortService` - The catalog RPC surface (`CreatePort`, `GetPorts`)
//! - `PortEntrySource` - Sequential reading of uploaded catalog entries

mod port_entry_source;
mod port_repository;
mod port_service;

pub use port_entry_source::{DecodeError, PortEntry, PortEntrySource};
pub use port_repository::{PortRepository, RepositoryError};
pub use port_service::{Code, PortService, PortServiceError};
