//! NoteSeek CLI
//!
//! Terminal client for the notes server: run one search, or check
//! whether the server is ready.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use noteseek::api::HttpClient;
use noteseek::config::ClientConfig;
use noteseek::controller::SearchController;

/// NoteSeek - find the PDF note that best matches a query
#[derive(Parser)]
#[command(name = "noteseek-cli")]
#[command(version)]
#[command(about = "Search your PDF notes from the terminal", long_about = None)]
struct Cli {
    /// Server base URL (overrides config file and NOTESEEK_SERVER_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the note that best matches a query
    Search {
        /// Query words (joined with spaces)
        #[arg(required = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Show server health
    Health,
}

/// Search outcome as printed by `--json`.
#[derive(Serialize)]
struct SearchReport {
    found: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    download: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("Failed to load config")?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = HttpClient::new(&config.server_url)
        .with_context(|| format!("Bad server URL {:?}", config.server_url))?;

    match cli.command {
        Commands::Search { query } => search(client, query.join(" "), cli.json).await,
        Commands::Health => health(client, cli.json).await,
    }
}

async fn search(client: HttpClient, query: String, json: bool) -> anyhow::Result<ExitCode> {
    let mut controller = SearchController::new(client);
    *controller.query_mut() = query;
    controller.perform_search().await;

    let state = controller.state();
    let client = controller.backend();
    let resolve = |href: &str| {
        client
            .resolve(href)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| href.to_string())
    };

    let report = if state.result_visible {
        SearchReport {
            found: true,
            message: state.message.clone(),
            title: Some(state.title.clone()),
            open: Some(resolve(&state.open_href)),
            download: Some(resolve(&state.download_href)),
        }
    } else {
        SearchReport {
            found: false,
            message: state.message.clone(),
            title: None,
            open: None,
            download: None,
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let (Some(title), Some(open), Some(download)) =
        (&report.title, &report.open, &report.download)
    {
        println!("{}", title);
        println!("  open:     {}", open);
        println!("  download: {}", download);
    } else {
        eprintln!("{}", report.message);
    }

    Ok(if report.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn health(client: HttpClient, json: bool) -> anyhow::Result<ExitCode> {
    let status = client
        .health()
        .await
        .with_context(|| format!("Health check against {} failed", client.base_url()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("Server:       {}", client.base_url());
        println!("Ready:        {}", if status.ok { "yes" } else { "no" });
        println!("Model loaded: {}", status.model_loaded);
        println!("PDFs indexed: {}", status.pdf_count);
        if let Some(error) = &status.error {
            println!("Error:        {}", error);
        }
    }

    Ok(if status.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
