//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Catalog handlers run inside the ports service next to the store; gateway
//! handlers run in the web app and reach the catalog through `PortService`.

pub mod handlers;

pub use handlers::{
    // Catalog handlers
    CatalogError, CreatePortCommand, CreatePortHandler, ListPortsHandler,
    // Gateway handlers
    FetchPortsHandler, IngestError, IngestPortsHandler,
};
