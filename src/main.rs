use anyhow::Result;
use csvfetch::{config::Settings, fetch::DEFAULT_CSV_URL, ingest};
use reqwest::Client;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let settings = Settings::from_env();
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(settings.log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();
    info!(url = DEFAULT_CSV_URL, "startup");

    // ─── 2) fetch & split ────────────────────────────────────────────
    let client = Client::new();
    match ingest::fetch_csv(&client).await {
        Some(table) => info!("{} rows ingested", table.len()),
        None => warn!("no data ingested"),
    }

    info!("all done");
    Ok(())
}
