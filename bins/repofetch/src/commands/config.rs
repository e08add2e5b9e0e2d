//! Show the effective configuration

use crate::output::Status;
use crate::settings::Settings;
use anyhow::Result;
use repofetch_core::config::OutputFormat;
use serde_json::json;
use std::time::Duration;

/// Print the settings every other command would run with
pub fn run(settings: &Settings) -> Result<()> {
    let client = &settings.client;
    let source = settings
        .source
        .as_ref()
        .map(|p| p.display().to_string());

    if settings.format == OutputFormat::Json {
        let value = json!({
            "settings_file": source,
            "client": client,
            "authenticated": client.token.is_some(),
            "format": settings.format,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    Status::header("repofetch configuration");
    println!("  Settings file:    {}", source.as_deref().unwrap_or("(none)"));
    println!("  Base URL:         {}", client.base_url);
    println!("  Timeout:          {}", describe_timeout(client.timeout));
    println!("  Connect timeout:  {}", describe_timeout(client.connect_timeout));
    println!("  User agent:       {}", client.user_agent);
    println!(
        "  Auth token:       {}",
        if client.token.is_some() { "set" } else { "not set" }
    );
    for (name, value) in &client.headers {
        println!("  Header:           {name}: {value}");
    }

    if client.timeout.is_none() {
        Status::warning("No request timeout configured; a stalled server blocks indefinitely");
    }

    Ok(())
}

fn describe_timeout(timeout: Option<Duration>) -> String {
    timeout.map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_timeout() {
        assert_eq!(describe_timeout(None), "none");
        assert_eq!(describe_timeout(Some(Duration::from_secs(30))), "30s");
    }
}
