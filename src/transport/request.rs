//! # HTTP Transport
//!
//! A single GET with a timeout, a status check and a typed JSON decode.
//! Every failure is folded into one of the three [`RequestError`] kinds
//! before it leaves this module. No retries happen here.

use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Timeout applied when the caller has no reason to pick another one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Errors that can occur while fetching and decoding a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request never produced a response: connection refused, DNS,
    /// timeout, a body cut off mid-read, or an unusable URL.
    Network(String),
    /// A response arrived with a status outside 200-299.
    Server { status: u16 },
    /// The status was fine but the body did not decode into the target type.
    Parsing(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network(msg) => write!(f, "Network connection error: {msg}"),
            RequestError::Server { status } => {
                write!(f, "Server error occurred (HTTP {status})")
            }
            RequestError::Parsing(msg) => write!(f, "Data parsing error: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Issues GET requests and decodes their JSON bodies.
///
/// Holds a shared `reqwest::Client` so connections are pooled across calls;
/// otherwise stateless.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetches `url` and decodes the body as `T`.
    ///
    /// The timeout covers the whole exchange, body included.
    pub async fn perform_request<T: DeserializeOwned>(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> Result<T, RequestError> {
        debug!("GET {} (timeout={}ms)", url, timeout.as_millis());

        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("GET {} failed before a response arrived: {}", url, e);
                RequestError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            warn!("GET {} returned HTTP {}", url, status.as_u16());
            return Err(RequestError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Reading body of {} failed: {}", url, e);
            RequestError::Network(e.to_string())
        })?;

        serde_json::from_slice::<T>(&body).map_err(|e| {
            warn!("Decoding body of {} ({} bytes) failed: {}", url, body.len(), e);
            RequestError::Parsing(e.to_string())
        })
    }
}
