mod args;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use seedpick_core::{load_config, tracker_warnings, validate_config, ReleaseFinder};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_logging();

    let env: HashMap<String, String> = std::env::vars().collect();
    let cli_args: Vec<String> = std::env::args().skip(1).collect();
    let query = args::parse_query(&cli_args, &env)?;

    // Determine config path
    let config_path = env
        .get("SEEDPICK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("seedpick.toml"));

    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;

    for warning in tracker_warnings(&config) {
        warn!("{}", warning);
    }
    info!(trackers = config.trackers.len(), "Configuration loaded");

    let finder = ReleaseFinder::from_config(config);

    let best = tokio::select! {
        best = finder.find_best_release(&query) => best,
        _ = shutdown_signal() => {
            info!("Interrupted, abandoning search");
            return Ok(());
        }
    };

    let output = serde_json::to_string_pretty(&best).context("Failed to encode result")?;
    println!("{}", output);

    Ok(())
}

/// Logs go to stderr so stdout carries only the result.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let json = std::env::var("SEEDPICK_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
