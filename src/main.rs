//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas and tracks caught Pokemon, backed by a
//! short-lived in-memory response cache.

use anyhow::Context;
use tokio::io::{self, BufReader};
use tokio::runtime;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::PokeApiClient;
use pokedex::repl::{self, Session};
use pokedex::{Config, ExpiringCache, FetchOrchestrator};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Build the tokio runtime
/// 3. Run the session until `exit`, EOF, or Ctrl+C
/// 4. Drop the runtime without waiting on the stdin reader thread
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let result = runtime.block_on(serve());

    // A blocking stdin read may still be parked on the blocking pool
    runtime.shutdown_background();
    info!("Pokedex closed");
    result
}

/// Loads configuration, creates the cache, and runs the command loop.
async fn serve() -> anyhow::Result<()> {
    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, request_timeout={}s",
        config.base_url, config.cache_interval, config.request_timeout
    );

    let client = PokeApiClient::from_config(&config).context("Failed to build HTTP client")?;
    let cache = ExpiringCache::new(config.cache_interval());
    let mut session = Session::new(FetchOrchestrator::new(client, cache.clone()));

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down...");
            trigger.cancel();
        }
    });

    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();
    let result = repl::run(&mut session, stdin, stdout, &shutdown).await;

    cache.shutdown();
    result.context("REPL I/O failed")
}
