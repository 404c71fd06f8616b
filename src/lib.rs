//! Port Catalog
//!
//! Streams uploaded catalogs of maritime ports into an in-memory store held by
//! a separate RPC service, and serves the catalog back over HTTP.
//!
//! # Architecture
//!
//! This crate follows hexagonal architecture (ports & adapters):
//!
//! - `domain` - the validated `Port` record
//! - `ports` - capability traits (`PortRepository`, `PortService`)
//! - `application` - catalog and gateway handlers
//! - `adapters` - memory store, JSON decoder, RPC transport, HTTP API
//! - `proto` - wire messages of the RPC surface
//! - `config` - environment-driven configuration
//! - `observability` - logging setup
//! - `lifecycle` - shutdown signal handling

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod lifecycle;
pub mod observability;
pub mod ports;
pub mod proto;
