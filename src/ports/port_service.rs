//! Port Service - The catalog RPC surface.
//!
//! Operates on wire messages so the same contract is served in-process
//! (`PortsRpcService`) and over the network (`RemotePortService`). The
//! gateway only depends on this trait.

use async_trait::async_trait;

use crate::proto::v1::{Port, PortList};

/// Status codes carried by the RPC transport.
///
/// Numeric values follow the gRPC canonical codes so a future switch to a
/// gRPC transport keeps the same contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Cancelled,
    Unknown,
    InvalidArgument,
    Internal,
    Unavailable,
}

impl Code {
    pub fn as_i32(self) -> i32 {
        match self {
            Code::Cancelled => 1,
            Code::Unknown => 2,
            Code::InvalidArgument => 3,
            Code::Internal => 13,
            Code::Unavailable => 14,
        }
    }

    pub fn from_i32(code: i32) -> Self {
        match code {
            1 => Code::Cancelled,
            3 => Code::InvalidArgument,
            13 => Code::Internal,
            14 => Code::Unavailable,
            _ => Code::Unknown,
        }
    }
}

/// RPC-level failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortServiceError {
    /// The request carried an invalid port.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The catalog store failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// The peer could not be reached or answered with something unexpected.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request cancelled")]
    Cancelled,
}

impl PortServiceError {
    pub fn code(&self) -> Code {
        match self {
            PortServiceError::InvalidArgument(_) => Code::InvalidArgument,
            PortServiceError::Storage(_) => Code::Internal,
            PortServiceError::Transport(_) => Code::Unavailable,
            PortServiceError::Cancelled => Code::Cancelled,
        }
    }

    /// Message without the category prefix, as sent on the wire.
    pub fn message(&self) -> String {
        match self {
            PortServiceError::InvalidArgument(msg)
            | PortServiceError::Storage(msg)
            | PortServiceError::Transport(msg) => msg.clone(),
            PortServiceError::Cancelled => "request cancelled".to_string(),
        }
    }

    /// Rebuild an error from a wire status.
    pub fn from_status(code: Code, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Code::InvalidArgument => PortServiceError::InvalidArgument(message),
            Code::Internal => PortServiceError::Storage(message),
            Code::Cancelled => PortServiceError::Cancelled,
            Code::Unavailable | Code::Unknown => PortServiceError::Transport(message),
        }
    }
}

/// Port for the catalog RPC service
#[async_trait]
pub trait PortService: Send + Sync {
    /// Validate and store a port, replacing any port with the same id.
    ///
    /// # Errors
    /// - `InvalidArgument` if the port has no id or no code
    /// - `Storage` if the catalog store fails
    async fn create_port(&self, port: Port) -> Result<(), PortServiceError>;

    /// Return the whole catalog in a single response.
    async fn get_ports(&self) -> Result<PortList, PortServiceError>;
}
