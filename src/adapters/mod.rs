//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-process catalog store
//! - `json` - streaming catalog document decoder
//! - `rpc` - catalog service transport (server, client, in-process service)
//! - `http` - public REST API of the web app

pub mod http;
pub mod json;
pub mod memory;
pub mod rpc;
