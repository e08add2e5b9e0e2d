//! User repository listing

use crate::error::{ServiceError, ServiceResult};
use crate::service::{is_dot_segment, Service};
use crate::transport::Transport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository listing API interface
pub struct ReposApi<'a, T> {
    service: &'a Service<T>,
}

impl<'a, T: Transport> ReposApi<'a, T> {
    /// Create a repository API interface over a service
    pub fn new(service: &'a Service<T>) -> Self {
        Self { service }
    }

    /// List the public repositories of `user`
    pub fn list(&self, user: &str) -> ServiceResult<Vec<RepoRecord>> {
        self.service.fetch_json(&repos_path(user)?)
    }

    /// Fetch the repository listing of `user` as raw text
    pub fn raw(&self, user: &str) -> ServiceResult<String> {
        self.service.fetch(&repos_path(user)?)
    }
}

/// Path of a user's repository listing, relative to the API root
///
/// The user name must be exactly one non-empty path segment.
fn repos_path(user: &str) -> ServiceResult<String> {
    if user.is_empty() || user.contains('/') || is_dot_segment(user) {
        return Err(ServiceError::InvalidIdentifier(user.to_string()));
    }
    Ok(format!("users/{user}/repos"))
}

/// One repository in a listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Repository ID
    pub id: i64,
    /// Repository name
    pub name: String,
    /// Free-form description; GitHub sends `null` when none is set
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for RepoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Render records as `[name, name, ...]`
#[must_use]
pub fn display_list(records: &[RepoRecord]) -> String {
    let names: Vec<String> = records.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(", "))
}
