//! Port module - the maritime port record held by the catalog.

mod aggregate;

pub use aggregate::Port;
