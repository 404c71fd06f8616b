//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod gateway;

pub use catalog::{CatalogError, CreatePortCommand, CreatePortHandler, ListPortsHandler};
pub use gateway::{FetchPortsHandler, IngestError, IngestPortsHandler};
