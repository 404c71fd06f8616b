//! Protobuf messages for the port catalog RPC surface.
//!
//! ## Proto File Organization
//!
//! ```text
//! proto/port/v1/
//! ├── ports.proto   - PortService and its messages
//! └── port.v1.rs    - Generated code, used when protoc is unavailable
//! ```
//!
//! ## Wire Format Guarantees
//!
//! - Field numbers are never reused
//! - New fields are always optional or have defaults
//!
//! The messages are generated from `ports.proto` by `prost-build` at build
//! time.

/// Version 1 of the port catalog protocol.
pub mod v1 {
    include!(concat!(env!("OUT_DIR"), "/port.v1.rs"));

    /// Path of the `CreatePort` method.
    pub const CREATE_PORT_PATH: &str = "/port.v1.PortService/CreatePort";

    /// Path of the `GetPorts` method.
    pub const GET_PORTS_PATH: &str = "/port.v1.PortService/GetPorts";

    /// Media type of every request and response body.
    pub const CONTENT_TYPE: &str = "application/x-protobuf";
}
