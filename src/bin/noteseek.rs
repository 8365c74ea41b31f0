//! NoteSeek - desktop search window for the notes server.
//!
//! This binary provides the user-facing search interface:
//! - Query field with Search button and Enter-to-search
//! - Result title, open/download links and preview
//! - Logs to stderr and a daily rotating file under the data directory

use anyhow::Context;
use eframe::egui;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use noteseek::api::HttpClient;
use noteseek::config::ClientConfig;
use noteseek::ui::SearchApp;

/// Initialize tracing: stderr always, plus a file appender when the log
/// directory can be created.
///
/// The returned guard must stay alive for buffered file output to be flushed.
fn init_logging(config: &ClientConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let log_dir = config.log_dir().and_then(|dir| match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(e) => {
            eprintln!("Failed to create log directory {:?}: {}", dir, e);
            None
        }
    });

    let (file_layer, guard) = match &log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "noteseek.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false); // No ANSI colors in log files
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        info!("Logging to {:?}", dir);
    }

    guard
}

fn main() -> anyhow::Result<()> {
    let (config, config_error) = match ClientConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = ClientConfig::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            (config, Some(e))
        }
    };

    let _log_guard = init_logging(&config);

    info!("NoteSeek v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}. Using defaults.", e);
    }

    let client = HttpClient::new(&config.server_url)
        .with_context(|| format!("Bad server URL {:?}", config.server_url))?;
    info!("Using notes server at {}", client.base_url());

    // Create tokio runtime for async requests
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_title("NoteSeek"),
        ..Default::default()
    };

    eframe::run_native(
        "NoteSeek",
        options,
        Box::new(move |cc| Ok(Box::new(SearchApp::new(cc, handle, client)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    info!("NoteSeek exiting");
    Ok(())
}
