//! List a user's repositories

use crate::dispatch;
use crate::output::{format_count, format_duration, Status};
use crate::settings::Settings;
use anyhow::Result;
use repofetch_api_client::{display_list, RepoClient, RepoRecord};
use repofetch_core::config::OutputFormat;
use repofetch_core::Error as CoreError;
use std::time::Instant;
use tracing::debug;

enum Listing {
    Raw(String),
    Records(Vec<RepoRecord>),
}

/// Fetch and print the repositories of `user`
pub async fn run(settings: Settings, user: String, raw: bool) -> Result<()> {
    let format = settings.format;
    let config = settings.client;
    let started = Instant::now();

    let (listing, stats) = dispatch::on_worker(move || {
        let client = RepoClient::with_config(config).map_err(CoreError::from)?;
        let repos = client.repos();

        let listing = if raw {
            repos.raw(&user).map(Listing::Raw)
        } else {
            repos.list(&user).map(Listing::Records)
        }
        .map_err(CoreError::from)?;

        Ok((listing, client.stats()))
    })
    .await?;

    let elapsed = started.elapsed();
    debug!(
        calls = stats.calls,
        transport_ms = stats.total.as_millis(),
        elapsed_ms = elapsed.as_millis(),
        "Listing fetched"
    );

    match (listing, format) {
        (Listing::Raw(body), _) => println!("{}", body.trim_end()),
        (Listing::Records(records), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        (Listing::Records(records), OutputFormat::Text) => {
            println!("{}", display_list(&records));
            Status::info(&format!(
                "{} in {}",
                format_count(records.len(), "repository", "repositories"),
                format_duration(elapsed)
            ));
        }
    }

    Ok(())
}
