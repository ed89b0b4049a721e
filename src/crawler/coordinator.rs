//! Crawl driver - main crawl loop
//!
//! This module contains the loop that walks the paginated listing:
//! fetch the current page, extract its quotes, then follow the "next"
//! link until no further page exists.

use crate::crawler::{fetch_page, next_page_url, parse_quotes};
use crate::quote::Quote;
use crate::Result;
use reqwest::Client;
use url::Url;

/// Walks the paginated listing from `origin` and accumulates every quote
///
/// The loop has two states: fetching (a page URL is pending) and done (the
/// last page carried no "next" link). Each iteration performs exactly one
/// fetch, appends that page's quotes to the accumulator, and computes the
/// next cursor. Requests are strictly sequential - a page is fully fetched
/// and parsed before the next one is touched.
///
/// Any fetch, parse, or pagination error aborts the crawl immediately and
/// discards the accumulated quotes.
///
/// # Arguments
///
/// * `client` - The HTTP client to fetch pages with
/// * `origin` - The site origin; both the first page URL and the base for
///   resolving pagination links
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - Every quote on every page, in site order
/// * `Err(ScrapeError)` - The first failure encountered
pub async fn run_crawl(client: &Client, origin: &Url) -> Result<Vec<Quote>> {
    let mut quotes = Vec::new();
    let mut cursor = Some(origin.to_string());
    let mut page_count = 0u32;

    while let Some(url) = cursor {
        tracing::info!("Fetching page {}: {}", page_count + 1, url);
        let html = fetch_page(client, &url).await?;

        let page_quotes = parse_quotes(&html)?;
        tracing::debug!("Extracted {} quotes from {}", page_quotes.len(), url);
        quotes.extend(page_quotes);
        page_count += 1;

        cursor = next_page_url(&html, origin)?;
    }

    tracing::info!(
        "Crawl finished: {} quotes across {} pages",
        quotes.len(),
        page_count
    );

    Ok(quotes)
}
