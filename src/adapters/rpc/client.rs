//! Client side of the catalog RPC service.

use std::time::Duration;

use async_trait::async_trait;
use prost::Message;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::ports::{Code, PortService, PortServiceError};
use crate::proto::v1 as proto;

/// `PortService` reached over the network.
///
/// No retries: a failed call surfaces immediately.
#[derive(Clone)]
pub struct RemotePortService {
    client: reqwest::Client,
    base_url: String,
}

impl RemotePortService {
    /// Create a client for the service at `base_url` (e.g. `http://127.0.0.1:8090`).
    ///
    /// Each call is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PortServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PortServiceError::Transport(format!("failed to build client: {err}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, PortServiceError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "rpc call");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, proto::CONTENT_TYPE)
            .body(request.encode_to_vec())
            .send()
            .await
            .map_err(|err| PortServiceError::Transport(format!("request to {url} failed: {err}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| PortServiceError::Transport(format!("failed to read response: {err}")))?;

        if status.is_success() {
            return Resp::decode(body)
                .map_err(|err| PortServiceError::Transport(format!("malformed response: {err}")));
        }

        match proto::Status::decode(body) {
            Ok(rpc_status) if rpc_status.code != 0 => Err(PortServiceError::from_status(
                Code::from_i32(rpc_status.code),
                rpc_status.message,
            )),
            _ => Err(PortServiceError::Transport(format!(
                "unexpected response status {status}"
            ))),
        }
    }
}

#[async_trait]
impl PortService for RemotePortService {
    async fn create_port(&self, port: proto::Port) -> Result<(), PortServiceError> {
        let _: proto::Empty = self.call(proto::CREATE_PORT_PATH, &port).await?;
        Ok(())
    }

    async fn get_ports(&self) -> Result<proto::PortList, PortServiceError> {
        self.call(proto::GET_PORTS_PATH, &proto::Empty {}).await
    }
}
