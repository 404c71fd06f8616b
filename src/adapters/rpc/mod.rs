//! RPC adapters - the catalog service over protobuf-on-HTTP.
//!
//! - `PortsRpcService` serves `PortService` in-process over the catalog handlers
//! - `rpc_router` / `serve` expose any `PortService` on the network
//! - `RemotePortService` calls a remote catalog through the same trait

mod client;
mod convert;
mod server;
mod service;

pub use client::RemotePortService;
pub use server::{rpc_router, serve};
pub use service::PortsRpcService;
