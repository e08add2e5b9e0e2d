//! Live tests against api.github.com.
//!
//! Run with `--features integration`; they need network access and are
//! subject to GitHub's unauthenticated rate limit unless `GITHUB_TOKEN` is set.

#![cfg(feature = "integration")]

use repofetch_api_client::{ClientConfig, RepoClient, ServiceError};
use std::time::Duration;

fn client() -> RepoClient {
    let mut config = ClientConfig::from_env().unwrap();
    config.timeout = Some(Duration::from_secs(30));
    RepoClient::with_config(config).unwrap()
}

#[test]
fn lists_public_repositories() {
    let repos = client().repos().list("octocat").unwrap();
    assert!(repos.iter().any(|r| r.name == "Hello-World"));
}

#[test]
fn unknown_user_is_not_found() {
    let err = client()
        .repos()
        .list("this-user-should-not-exist-7f3a9c")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Status { status: 404, .. }));
}
