//! Blocking transport layer
//!
//! A [`Transport`] performs exactly one network exchange per [`Request`]. It
//! does not retry, cache or follow application-level pagination; connection
//! reuse is up to the implementation.

use crate::error::{TransportError, TransportResult};
use crate::request::Request;
use crate::response::Response;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// User-Agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("repofetch/", env!("CARGO_PKG_VERSION"));

/// Sends one request and blocks until the whole response has arrived
///
/// Must not be called where blocking is disallowed (e.g. directly on an
/// async executor thread).
pub trait Transport: Send + Sync {
    /// Perform the exchange
    fn send(&self, request: Request) -> TransportResult<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> TransportResult<Response> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: Request) -> TransportResult<Response> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: Request) -> TransportResult<Response> {
        (**self).send(request)
    }
}

/// Settings for [`HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Whole-exchange timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Connect timeout; `None` waits indefinitely
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// Headers sent with every request
    pub default_headers: Vec<(String, String)>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: Vec::new(),
        }
    }
}

/// HTTP transport backed by a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
}

impl HttpTransport {
    /// Create a transport with default settings
    pub fn new() -> TransportResult<Self> {
        Self::with_config(&TransportConfig::default())
    }

    /// Create a transport with specific settings
    pub fn with_config(config: &TransportConfig) -> TransportResult<Self> {
        let default_headers = header_map(&config.default_headers)?;

        // reqwest applies a 30s timeout unless told otherwise
        let inner = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(default_headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { inner })
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(url = %request.url(), request_id))]
    fn send(&self, request: Request) -> TransportResult<Response> {
        let url = request.parsed_url()?;
        let headers = header_map(request.headers())?;

        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let response = self
            .inner
            .get(url)
            .headers(headers)
            .header(X_REQUEST_ID, request_id.as_str())
            .send()
            .map_err(|e| {
                warn!(error = %e, "Request failed");
                TransportError::from(e)
            })?;

        let status = response.status().as_u16();
        let body = response.bytes()?;

        debug!(status, bytes = body.len(), "Response received");
        Ok(Response::new(status, body.to_vec()))
    }
}

/// Convert name/value pairs into a header map
fn header_map(headers: &[(String, String)]) -> TransportResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            TransportError::invalid_request(format!("invalid header name {name:?}: {e}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            TransportError::invalid_request(format!("invalid value for header {name}: {e}"))
        })?;
        map.append(name, value);
    }

    Ok(map)
}
