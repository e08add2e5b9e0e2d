//! repofetch - list a GitHub user's repositories
//!
//! The API client is blocking; this binary owns the async boundary and runs
//! every fetch on tokio's blocking pool before rendering on the main task.

use clap::{Parser, Subcommand, ValueEnum};
use repofetch_core::config::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod dispatch;
mod output;
mod settings;

use settings::Settings;

/// Fetch GitHub repository listings
#[derive(Parser)]
#[command(name = "repofetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to the settings file, then text)
    #[arg(short, long, global = true, value_enum)]
    format: Option<Format>,

    /// Settings file (defaults to .repofetch.toml or the user config dir)
    #[arg(short, long, global = true, env = "REPOFETCH_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's public repositories
    Repos {
        /// GitHub user name
        user: String,

        /// Print the response body instead of decoded records
        #[arg(short, long)]
        raw: bool,
    },

    /// Fetch an absolute URL and print the body
    Raw {
        /// Absolute http(s) URL
        url: String,
    },

    /// Fetch a path relative to the base URL and print the body
    Get {
        /// Path or identifier appended to the base URL
        identifier: String,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("repofetch=debug,repofetch_api_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let requested_format = cli.format.map(OutputFormat::from);
    let settings = match Settings::resolve(
        cli.config.as_deref(),
        cli.base_url,
        cli.timeout,
        requested_format,
    ) {
        Ok(settings) => settings,
        Err(e) => return exit_with(&e, requested_format.unwrap_or(OutputFormat::Text)),
    };

    let format = settings.format;
    match run(cli.command, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_with(&e, format),
    }
}

fn exit_with(err: &anyhow::Error, format: OutputFormat) -> ExitCode {
    let code = output::report_error(err, format);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

async fn run(command: Commands, settings: Settings) -> anyhow::Result<()> {
    match command {
        Commands::Repos { user, raw } => commands::repos::run(settings, user, raw).await,
        Commands::Raw { url } => commands::fetch::run_url(settings, url).await,
        Commands::Get { identifier } => commands::fetch::run_identifier(settings, identifier).await,
        Commands::Config => commands::config::run(&settings),
    }
}
