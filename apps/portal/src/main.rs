use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portal::config::Config;
use portal::snapshot::render_snapshot;
use portal::store::store_for;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env applies
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the snapshot JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting portal snapshot v{}", env!("CARGO_PKG_VERSION"));

    let store = store_for(config.dataset_path.as_deref());
    info!("Record store: {}", store.describe());

    let dataset = store.load().await?;
    let snapshot = render_snapshot(&dataset, config.listing, &config.query)?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
