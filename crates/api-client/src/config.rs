//! Configuration for the repofetch API client
//!
//! Values are layered: built-in defaults, then the settings file, then
//! environment variables. Callers may overwrite fields afterwards (the CLI
//! does this for its flags) and must call [`ClientConfig::validate`].

use crate::error::{ApiError, ApiResult};
use crate::request::{parse_absolute_url, RequestOptions};
use crate::transport::{TransportConfig, DEFAULT_USER_AGENT};
use repofetch_core::config::ClientSettings;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Default GitHub REST API root
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Media type GitHub recommends for REST calls
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Client configuration
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    /// Base endpoint that identifiers are appended to
    pub base_url: String,
    /// Whole-request timeout; `None` means unbounded
    #[serde(with = "optional_secs")]
    pub timeout: Option<Duration>,
    /// Connect timeout; `None` means unbounded
    #[serde(with = "optional_secs")]
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
    /// Bearer token for the `Authorization` header
    #[serde(skip)]
    pub token: Option<String>,
}

mod optional_secs {
    use serde::Serializer;
    use std::time::Duration;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: BTreeMap::new(),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables over defaults
    pub fn from_env() -> ApiResult<Self> {
        Self::default().apply_env(|name| std::env::var(name).ok())
    }

    /// Create configuration from a settings file section over defaults
    #[must_use]
    pub fn from_settings(settings: &ClientSettings) -> Self {
        let mut config = Self::default();

        if let Some(ref url) = settings.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(secs) = settings.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = settings.connect_timeout_secs {
            config.connect_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(ref agent) = settings.user_agent {
            config.user_agent.clone_from(agent);
        }
        config.headers.extend(settings.headers.clone());

        config
    }

    /// Overlay environment variables read through `lookup`
    ///
    /// Reads the following variables:
    /// - `REPOFETCH_BASE_URL`: Base endpoint
    /// - `REPOFETCH_TIMEOUT_SECS`: Request timeout in seconds
    /// - `REPOFETCH_CONNECT_TIMEOUT_SECS`: Connect timeout in seconds
    /// - `REPOFETCH_USER_AGENT`: User-Agent header
    /// - `GITHUB_TOKEN`: Bearer token
    pub fn apply_env<F>(mut self, lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("REPOFETCH_BASE_URL") {
            self.base_url = url;
        }
        if let Some(secs) = parse_secs(&lookup, "REPOFETCH_TIMEOUT_SECS")? {
            self.timeout = Some(secs);
        }
        if let Some(secs) = parse_secs(&lookup, "REPOFETCH_CONNECT_TIMEOUT_SECS")? {
            self.connect_timeout = Some(secs);
        }
        if let Some(agent) = lookup("REPOFETCH_USER_AGENT") {
            self.user_agent = agent;
        }
        if let Some(token) = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.token = Some(token.trim().to_string());
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        parse_absolute_url(&self.base_url).map_err(|e| ApiError::config(format!("base_url: {e}")))?;

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.connect_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("connect_timeout cannot be zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ApiError::config("user_agent cannot be empty"));
        }

        Ok(())
    }

    /// Transport settings derived from this configuration
    #[must_use]
    pub fn transport_config(&self) -> TransportConfig {
        let mut default_headers: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if let Some(ref token) = self.token {
            default_headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        TransportConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent.clone(),
            default_headers,
        }
    }

    /// Options attached to every service request
    #[must_use]
    pub fn request_options(&self) -> RequestOptions {
        let has_accept = self
            .headers
            .keys()
            .any(|k| k.eq_ignore_ascii_case("accept"));

        let headers = if has_accept {
            Vec::new()
        } else {
            vec![("Accept".to_string(), GITHUB_ACCEPT.to_string())]
        };

        RequestOptions { headers }
    }
}

fn parse_secs<F>(lookup: &F, name: &str) -> ApiResult<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| ApiError::invalid_env(name, format!("{raw:?}: {e}"))),
    }
}
