//! Ports service (RPC) configuration

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;
use super::server::socket_addr;

/// Configuration shared by the ports service and its clients
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
    /// Host address the ports service binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the ports service listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL the web app uses to reach the ports service
    #[serde(default = "default_ports_service_url")]
    pub ports_service_url: String,

    /// Per-call timeout on the client side, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Time open connections get to drain on shutdown, in seconds
    #[serde(default = "default_shutdown_grace")]
    pub shutdown_grace_secs: u64,
}

impl RpcConfig {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        socket_addr(&self.host, self.port)
    }

    /// Validate RPC configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !self.ports_service_url.starts_with("http://")
            && !self.ports_service_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidServiceUrl(
                self.ports_service_url.clone(),
            ));
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ports_service_url: default_ports_service_url(),
            request_timeout_secs: default_request_timeout(),
            shutdown_grace_secs: default_shutdown_grace(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_ports_service_url() -> String {
    "http://127.0.0.1:8090".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_shutdown_grace() -> u64 {
    10
}
