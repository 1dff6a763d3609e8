//! Apicalypse command line tool
//!
//! Renders one query for an endpoint and prints it to stdout. Logs go to
//! stderr.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apicalypse_core::config::ClientConfig;

mod args;
mod document;
mod render;

fn main() -> anyhow::Result<()> {
    let cli = args::parse_args();

    init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        ClientConfig::default()
    });

    let filter = match &cli.where_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let filter = document::parse_filter(&text)
                .with_context(|| format!("Invalid filter document {}", path.display()))?;
            Some(filter)
        }
        None => None,
    };

    let query = render::render(&cli, filter, &config)?;
    tracing::debug!(endpoint = ?cli.endpoint, length = query.len(), "Rendered query");

    println!("{}", query);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,apicalypse=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
