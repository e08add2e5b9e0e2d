//! Error types for the transport, service and client layers

use repofetch_core::{Error as CoreError, ErrorCode};
use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for client construction and configuration
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures of a single request/response exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request was rejected before any network I/O
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// DNS, TCP or TLS failure
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A configured timeout elapsed
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The peer sent something that is not a well-formed HTTP response
    #[error("Protocol error: {0}")]
    ProtocolError(String),
}

impl TransportError {
    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Error code matching this failure
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::ConnectionFailed(_) => ErrorCode::ConnectionFailed,
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::ProtocolError(_) => ErrorCode::ProtocolError,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            Self::Timeout(message)
        } else if err.is_builder() {
            Self::InvalidRequest(message)
        } else if err.is_connect() || (err.is_request() && has_io_source(&err)) {
            Self::ConnectionFailed(message)
        } else {
            // parse, body, decode and redirect failures
            Self::ProtocolError(message)
        }
    }
}

/// Whether an I/O error sits anywhere in the source chain
fn has_io_source(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(inner) = source {
        if inner.is::<std::io::Error>() {
            return true;
        }
        source = inner.source();
    }
    false
}

/// Failures of a domain-level fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The identifier does not address any resource
    #[error("Invalid identifier {0:?}")]
    InvalidIdentifier(String),

    /// The transport failed; nothing was decoded
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] TransportError),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, lossily decoded
        body: String,
    },

    /// The payload is not in the expected format
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl ServiceError {
    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ServiceError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::DecodeError(format!("payload is not valid UTF-8: {err}"))
    }
}

/// Client construction and configuration errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment variable present but unusable
    #[error("Invalid environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Variable name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP transport could not be built
    #[error("Failed to build transport: {0}")]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid env var error
    pub fn invalid_env(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEnvVar {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<TransportError> for CoreError {
    fn from(err: TransportError) -> Self {
        let suggestion = match err {
            TransportError::InvalidRequest(_) => {
                Some("Use an absolute http:// or https:// URL with valid headers")
            }
            TransportError::ConnectionFailed(_) => {
                Some("Check network connectivity and the configured base URL")
            }
            TransportError::Timeout(_) => {
                Some("Raise --timeout or REPOFETCH_TIMEOUT_SECS, or unset it for no bound")
            }
            TransportError::ProtocolError(_) => None,
        };

        let error = CoreError::network(err.code(), err.to_string());
        match suggestion {
            Some(s) => error.with_suggestion(s),
            None => error,
        }
    }
}

impl From<ServiceError> for CoreError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::TransportFailure(inner) => inner.into(),
            ServiceError::InvalidIdentifier(_) => {
                CoreError::network(ErrorCode::InvalidRequest, err.to_string())
                    .with_suggestion("Pass a non-empty user name or path")
            }
            ServiceError::Status { status, ref body } => {
                let error = CoreError::network(ErrorCode::HttpStatus, err.to_string());
                let error = if body.is_empty() {
                    error
                } else {
                    error.with_context(body.clone())
                };
                match status {
                    404 => error.with_suggestion("Check that the user or resource exists"),
                    401 | 403 => error.with_suggestion(
                        "Set GITHUB_TOKEN to authenticate and raise the API rate limit",
                    ),
                    _ => error,
                }
            }
            ServiceError::DecodeError(_) => {
                CoreError::new(ErrorCode::InvalidFormat, err.to_string())
            }
        }
    }
}

impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(inner) => inner.into(),
            ApiError::Config(_) | ApiError::InvalidEnvVar { .. } => {
                CoreError::config_invalid(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_codes() {
        assert_eq!(
            TransportError::invalid_request("x").code(),
            ErrorCode::InvalidRequest
        );
        assert_eq!(
            TransportError::Timeout("t".into()).code(),
            ErrorCode::Timeout
        );
    }

    #[test]
    fn test_status_classification() {
        let not_found = ServiceError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let bad_gateway = ServiceError::Status {
            status: 502,
            body: String::new(),
        };
        assert!(bad_gateway.is_server_error());
    }

    #[test]
    fn test_transport_failure_converts_to_core() {
        let err: CoreError =
            ServiceError::TransportFailure(TransportError::Timeout("5s".into())).into();
        assert_eq!(err.code, ErrorCode::Timeout);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_status_converts_with_suggestion() {
        let err: CoreError = ServiceError::Status {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::HttpStatus);
        assert!(err.context.as_deref().unwrap().contains("Not Found"));
        assert!(err.suggestion.unwrap().contains("exists"));
    }

    #[test]
    fn test_decode_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ServiceError::from(json_err);
        assert!(matches!(err, ServiceError::DecodeError(_)));

        let core: CoreError = err.into();
        assert_eq!(core.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_config_error_converts() {
        let err: CoreError = ApiError::invalid_env("REPOFETCH_TIMEOUT_SECS", "not a number").into();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("REPOFETCH_TIMEOUT_SECS"));
    }
}
