//! Core utilities for repofetch
//!
//! This crate provides functionality shared by the API client and the CLI:
//!
//! - **Error handling**: Coded errors with context and recovery suggestions
//! - **Configuration**: TOML settings file discovery and schema
//!
//! # Example
//!
//! ```rust,no_run
//! use repofetch_core::config::Config;
//!
//! let config = Config::load(None).expect("settings file is invalid");
//! println!("base url: {:?}", config.schema.client.base_url);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ClientSettings, Config, ConfigSchema, OutputSettings};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
