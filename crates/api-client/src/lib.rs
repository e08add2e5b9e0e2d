//! Blocking HTTP client for GitHub repository listings
//!
//! This crate provides a small, synchronous request/response stack:
//!
//! - **Transport**: one blocking GET per [`Request`], returning a raw
//!   [`Response`] or a [`TransportError`]
//! - **Service**: resolves identifiers against a base endpoint, delegates to a
//!   transport and decodes the payload as text or JSON
//! - **Endpoints**: typed wrappers such as [`ReposApi`]
//! - **Configuration**: defaults, settings file and environment layering
//!
//! Nothing here retries, caches or spawns threads. Calls block; run them on a
//! thread where blocking is allowed.
//!
//! # Example
//!
//! ```rust,no_run
//! use repofetch_api_client::{display_list, RepoClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RepoClient::new()?;
//!
//!     let repos = client.repos().list("chizidegit")?;
//!     println!("{}", display_list(&repos));
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod request;
pub mod response;
pub mod service;
pub mod transport;

pub use client::RepoClient;
pub use config::ClientConfig;
pub use endpoints::{display_list, RepoRecord, ReposApi};
pub use error::{ApiError, ApiResult, ServiceError, ServiceResult, TransportError, TransportResult};
pub use request::{Request, RequestOptions};
pub use response::Response;
pub use service::Service;
pub use transport::{HttpTransport, Transport, TransportConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::RepoClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{display_list, RepoRecord, ReposApi};
    pub use crate::error::{ApiError, ServiceError, TransportError};
    pub use crate::middleware::TimedTransport;
    pub use crate::request::{Request, RequestOptions};
    pub use crate::response::Response;
    pub use crate::service::Service;
    pub use crate::transport::{HttpTransport, Transport};
}
