//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of GitHub REST endpoints.
//!
//! | Module | Path | Description |
//! |--------|------|-------------|
//! | `repos` | `users/{user}/repos` | Public repositories of a user |

pub mod repos;

pub use repos::{display_list, RepoRecord, ReposApi};
