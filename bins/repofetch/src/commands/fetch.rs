//! Fetch arbitrary resources as text

use crate::dispatch;
use crate::settings::Settings;
use anyhow::Result;
use repofetch_api_client::RepoClient;
use repofetch_core::Error as CoreError;

/// Fetch an absolute URL and print the body
pub async fn run_url(settings: Settings, url: String) -> Result<()> {
    let body = dispatch::on_worker(move || {
        let client = RepoClient::with_config(settings.client).map_err(CoreError::from)?;
        Ok(client.fetch_url(&url).map_err(CoreError::from)?)
    })
    .await?;

    println!("{}", body.trim_end());
    Ok(())
}

/// Fetch a path relative to the base URL and print the body
pub async fn run_identifier(settings: Settings, identifier: String) -> Result<()> {
    let body = dispatch::on_worker(move || {
        let client = RepoClient::with_config(settings.client).map_err(CoreError::from)?;
        Ok(client.fetch(&identifier).map_err(CoreError::from)?)
    })
    .await?;

    println!("{}", body.trim_end());
    Ok(())
}
