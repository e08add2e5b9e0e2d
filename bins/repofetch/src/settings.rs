//! Effective settings: file, then environment, then flags

use repofetch_api_client::ClientConfig;
use repofetch_core::config::{Config, OutputFormat};
use repofetch_core::Error as CoreError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything a command needs to run
#[derive(Debug, Clone)]
pub struct Settings {
    pub client: ClientConfig,
    pub format: OutputFormat,
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Layer the settings file, environment and command-line flags
    pub fn resolve(
        config_path: Option<&Path>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        format: Option<OutputFormat>,
    ) -> anyhow::Result<Self> {
        let file = Config::load(config_path)?;

        let mut client = ClientConfig::from_settings(&file.schema.client)
            .apply_env(|name| std::env::var(name).ok())
            .map_err(CoreError::from)?;

        if let Some(url) = base_url {
            client.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            client.timeout = Some(Duration::from_secs(secs));
        }

        client.validate().map_err(CoreError::from)?;

        Ok(Self {
            client,
            format: format.unwrap_or(file.schema.output.format),
            source: file.path,
        })
    }
}
