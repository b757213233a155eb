use tracing::{debug, info};

use crate::config::Config;

mod fetcher;
mod parser;
pub mod models;

use models::ListingSnapshot;

/// Fetches the watched listing page and extracts the current snapshot.
///
/// Any transport error or non-2xx status aborts the run: a failed fetch
/// must never be mistaken for an empty page.
pub async fn fetch_listing_snapshot(cfg: &Config) -> anyhow::Result<ListingSnapshot> {
    let client = fetcher::build_client();

    debug!(url = %cfg.watch_url, "Fetching listing page");
    let html = fetcher::fetch_html(&client, &cfg.watch_url).await?;

    let snapshot = parser::parse_listing_snapshot(&html, cfg.fetch_limit);
    info!(count = snapshot.len(), "Extracted listings from page");

    Ok(snapshot)
}
