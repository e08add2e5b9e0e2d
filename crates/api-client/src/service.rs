//! Domain-level fetches on top of a [`Transport`]

use crate::error::{ServiceError, ServiceResult, TransportResult};
use crate::request::{parse_absolute_url, Request, RequestOptions};
use crate::response::Response;
use crate::transport::Transport;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Resolves identifiers against a base endpoint and fetches them
///
/// Every call is a single linear exchange: one request, then either a
/// decoded payload or an error. Nothing is cached or retried.
#[derive(Debug)]
pub struct Service<T> {
    transport: T,
    base_url: Url,
    options: RequestOptions,
}

impl<T: Transport> Service<T> {
    /// Create a service rooted at `base_url`
    pub fn new(transport: T, base_url: &str) -> TransportResult<Self> {
        Self::with_options(transport, base_url, RequestOptions::default())
    }

    /// Create a service that attaches `options` to every request
    pub fn with_options(
        transport: T,
        base_url: &str,
        options: RequestOptions,
    ) -> TransportResult<Self> {
        let base_url = parse_absolute_url(base_url)?;
        Ok(Self {
            transport,
            base_url,
            options,
        })
    }

    /// Base endpoint
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the absolute URL for an identifier
    ///
    /// The identifier is split on `/` and every non-empty segment is
    /// percent-encoded and appended to the base path. Dot segments would be
    /// collapsed by URL normalisation, so they are rejected.
    pub fn resolve(&self, identifier: &str) -> ServiceResult<Url> {
        let segments: Vec<&str> = identifier.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() || segments.iter().copied().any(is_dot_segment) {
            return Err(ServiceError::InvalidIdentifier(identifier.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ServiceError::InvalidIdentifier(identifier.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Fetch `base + identifier` and return the body as text
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub fn fetch(&self, identifier: &str) -> ServiceResult<String> {
        let url = self.resolve(identifier)?;
        self.exchange(url.as_str())?.into_text()
    }

    /// Fetch `base + identifier` and decode the body as JSON
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub fn fetch_json<D: DeserializeOwned>(&self, identifier: &str) -> ServiceResult<D> {
        let url = self.resolve(identifier)?;
        self.exchange(url.as_str())?.into_json()
    }

    /// Fetch an absolute URL, ignoring the base, and return the body as text
    #[instrument(skip(self))]
    pub fn fetch_url(&self, url: &str) -> ServiceResult<String> {
        self.exchange(url)?.into_text()
    }

    /// One request, with non-2xx statuses turned into errors
    fn exchange(&self, url: &str) -> ServiceResult<Response> {
        let request = Request::with_options(url, self.options.clone());
        let response = self.transport.send(request)?;

        debug!(
            url = %url,
            status = response.status(),
            bytes = response.body().len(),
            "Exchange complete"
        );

        if response.is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = String::from_utf8_lossy(response.body()).into_owned();
            Err(ServiceError::Status { status, body })
        }
    }
}

/// `.` and `..` never address a resource of their own
pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
