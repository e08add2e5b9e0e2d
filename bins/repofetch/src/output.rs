//! Terminal output utilities

use owo_colors::OwoColorize;
use repofetch_core::config::OutputFormat;
use repofetch_core::error::exit_codes;
use repofetch_core::{Error as CoreError, ErrorCode};
use std::time::Duration;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a duration for display
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Print an error to stderr and return the process exit code for it
pub fn report_error(err: &anyhow::Error, format: OutputFormat) -> i32 {
    let core = err.downcast_ref::<CoreError>();

    match format {
        OutputFormat::Json => {
            let report = match core {
                Some(e) => e.to_report(),
                None => CoreError::new(ErrorCode::Internal, format!("{err:#}")).to_report(),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err:#}"),
            }
        }
        OutputFormat::Text => eprintln!("{} {:#}", "Error:".red().bold(), err),
    }

    core.map_or(exit_codes::FAILURE, CoreError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration(Duration::from_secs_f32(5.5)), "5.5s");
    }

    #[test]
    fn test_format_duration_mins() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "repository", "repositories"), "1 repository");
        assert_eq!(format_count(0, "repository", "repositories"), "0 repositories");
    }

    #[test]
    fn test_report_error_exit_codes() {
        let timeout = anyhow::Error::new(CoreError::new(ErrorCode::Timeout, "slow"));
        assert_eq!(report_error(&timeout, OutputFormat::Json), exit_codes::TIMEOUT);

        let other = anyhow::anyhow!("something else");
        assert_eq!(report_error(&other, OutputFormat::Text), exit_codes::FAILURE);
    }
}
