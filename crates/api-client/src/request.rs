//! Immutable request values

use crate::error::{TransportError, TransportResult};
use reqwest::Url;

/// Optional per-request configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Extra headers, sent in order
    pub headers: Vec<(String, String)>,
}

/// A single GET request against an absolute URL
///
/// Built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    options: RequestOptions,
}

impl Request {
    /// Create a request with no extra options
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_options(url, RequestOptions::default())
    }

    /// Create a request with the given options
    pub fn with_options(url: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }

    /// Target URL as given
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Extra headers
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.options.headers
    }

    /// Request options
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Parse and check the target URL
    pub fn parsed_url(&self) -> TransportResult<Url> {
        parse_absolute_url(&self.url)
    }
}

/// Parse an absolute `http`/`https` URL
///
/// Relative references, other schemes and hostless URLs are rejected with
/// [`TransportError::InvalidRequest`].
pub fn parse_absolute_url(raw: &str) -> TransportResult<Url> {
    let url = Url::parse(raw)
        .map_err(|e| TransportError::invalid_request(format!("{raw:?} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(TransportError::invalid_request(format!(
                "unsupported scheme {other:?} in {raw:?}"
            )));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TransportError::invalid_request(format!(
            "{raw:?} has no host"
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(parse_absolute_url("https://api.github.com/users/chizidegit/repos").is_ok());
        assert!(parse_absolute_url("http://localhost:8080/").is_ok());
    }

    #[test]
    fn test_rejects_malformed_urls() {
        for raw in [
            "",
            "users/chizidegit/repos",
            "/users/x",
            "api.github.com/users",
            "ftp://example.com/file",
            "mailto:someone@example.com",
            "http://",
            "https://exa mple.com/",
        ] {
            let err = parse_absolute_url(raw).unwrap_err();
            assert!(
                matches!(err, TransportError::InvalidRequest(_)),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_request_is_plain_value() {
        let options = RequestOptions {
            headers: vec![("Accept".into(), "application/json".into())],
        };
        let request = Request::with_options("https://example.com/", options.clone());

        assert_eq!(request.url(), "https://example.com/");
        assert_eq!(request.options(), &options);
        assert_eq!(request.clone(), request);
    }

    proptest! {
        #[test]
        fn relative_paths_are_invalid(path in "[a-z0-9_./-]{0,40}") {
            let result = Request::new(path).parsed_url();
            prop_assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
        }

        #[test]
        fn https_urls_with_host_are_valid(host in "[a-z]{1,12}", path in "[a-z0-9/]{0,20}") {
            let raw = format!("https://{host}.example/{path}");
            prop_assert!(parse_absolute_url(&raw).is_ok());
        }
    }
}
