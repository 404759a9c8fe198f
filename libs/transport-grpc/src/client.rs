//! gRPC client transport configuration and connection utilities.
//!
//! This module is responsible only for transport-level configuration:
//! connect and RPC timeouts, HTTP/2 keepalive, and a tracing span around
//! connection establishment. A transport-level error during a call is fatal
//! to that call; there is no retry layer.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the initial connection.
    pub connect_timeout: Duration,

    /// Timeout for individual RPC calls (applied at transport level).
    ///
    /// Streaming calls are bounded by this too, so it must comfortably
    /// exceed the longest paced demonstration stream.
    pub rpc_timeout: Duration,

    /// Service name for tracing.
    pub service_name: &'static str,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(60),
            service_name: "grpc_client",
        }
    }
}

impl GrpcClientConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the RPC timeout.
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }
}

/// Build a tonic `Endpoint` with timeouts and keepalive settings.
fn build_endpoint(
    uri: String,
    cfg: &GrpcClientConfig,
) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Connect to a gRPC service with the configured transport stack.
///
/// # Errors
/// Returns an error if the URI is invalid or the connection cannot be
/// established within the connect timeout.
pub async fn connect_with_stack(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<Channel> {
    let uri_string = uri.into();
    let span = tracing::debug_span!(
        "grpc_connect",
        service = cfg.service_name,
        uri = %uri_string
    );

    async move {
        let endpoint = build_endpoint(uri_string, cfg)?;
        let channel = endpoint.connect().await?;
        tracing::debug!(
            service = cfg.service_name,
            connect_timeout_ms = cfg.connect_timeout.as_millis() as u64,
            rpc_timeout_ms = cfg.rpc_timeout.as_millis() as u64,
            "gRPC channel established"
        );
        Ok(channel)
    }
    .instrument(span)
    .await
}
