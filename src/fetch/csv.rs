use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

/// Local endpoint serving the CSV export.
pub const DEFAULT_CSV_URL: &str = "http://localhost:5000/get-csv";

/// GET `url` and return the response body as text.
///
/// Transport failures and non-2xx statuses come back as the same error;
/// callers are not expected to tell them apart.
pub async fn fetch_csv_text(client: &Client, url: &str) -> Result<String> {
    debug!(url, "requesting CSV");
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetching CSV from {}", url))?;
    debug!(url, status = %resp.status(), "response received");

    let text = resp
        .error_for_status()
        .with_context(|| format!("fetching CSV from {}", url))?
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))?;

    Ok(text)
}
