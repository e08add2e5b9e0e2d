//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::ReposApi;
use crate::error::{ApiResult, ServiceResult};
use crate::middleware::{TimedTransport, TimingStats};
use crate::service::Service;
use crate::transport::HttpTransport;
use std::sync::Arc;
use tracing::debug;

/// Transport stack used by [`RepoClient`]
pub type ClientTransport = TimedTransport<HttpTransport>;

/// GitHub repository client
///
/// Wraps a [`Service`] over a timed [`HttpTransport`]. Every call blocks the
/// current thread; async callers should move a clone onto a blocking pool.
/// Cloning is cheap and clones share the same connection pool and counters.
#[derive(Clone)]
pub struct RepoClient {
    service: Arc<Service<ClientTransport>>,
    config: Arc<ClientConfig>,
}

impl RepoClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let transport = HttpTransport::with_config(&config.transport_config())?;
        let service = Service::with_options(
            TimedTransport::new(transport),
            &config.base_url,
            config.request_options(),
        )?;

        debug!(
            base_url = %config.base_url,
            timeout = ?config.timeout,
            authenticated = config.token.is_some(),
            "Client created"
        );

        Ok(Self {
            service: Arc::new(service),
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.service.base_url()
    }

    /// Underlying service
    #[must_use]
    pub fn service(&self) -> &Service<ClientTransport> {
        &self.service
    }

    /// Timing counters across all calls made through this client
    #[must_use]
    pub fn stats(&self) -> TimingStats {
        self.service.transport().stats()
    }

    /// Access repository endpoints
    #[must_use]
    pub fn repos(&self) -> ReposApi<'_, ClientTransport> {
        ReposApi::new(&self.service)
    }

    /// Fetch `base + identifier` as text
    pub fn fetch(&self, identifier: &str) -> ServiceResult<String> {
        self.service.fetch(identifier)
    }

    /// Fetch an absolute URL as text
    pub fn fetch_url(&self, url: &str) -> ServiceResult<String> {
        self.service.fetch_url(url)
    }
}
