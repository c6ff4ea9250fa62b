//! Ladle binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod config;
mod error;
mod events;
mod favorites;
mod logic;
mod net;
mod pages;
mod paths;
mod state;
mod ui;
mod util;

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

struct LadleTimer;

impl tracing_subscriber::fmt::time::FormatTime for LadleTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(_) => 0,
        };
        let s = crate::util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-THH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();

    // Initialize tracing logger writing to ~/.config/ladle/logs/ladle.log
    {
        let mut log_path = crate::paths::logs_dir();
        log_path.push("ladle.log");
        let level = args::determine_log_level(&cli);
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(LadleTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(LadleTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!("Ladle starting");
    if let Err(err) = app::run(cli).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Ladle exited");
}
