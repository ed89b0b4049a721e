//! Crawler module for page fetching and quote extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching of listing pages
//! - HTML parsing and quote extraction
//! - Pagination link resolution
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod paginator;
mod parser;

pub use coordinator::run_crawl;
pub use fetcher::{build_http_client, fetch_page};
pub use paginator::next_page_url;
pub use parser::parse_quotes;

use crate::quote::Quote;
use crate::{Result, BASE_URL};
use url::Url;

/// Runs a complete crawl of the quotes site
///
/// This is the main entry point for scraping. It will:
/// 1. Build the HTTP client
/// 2. Fetch the first listing page at [`BASE_URL`]
/// 3. Extract quotes and follow "next" links until the last page
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - All quotes across all pages, in site order
/// * `Err(ScrapeError)` - The first fetch, parse, or pagination failure
pub async fn crawl() -> Result<Vec<Quote>> {
    let client = build_http_client()?;
    let origin = Url::parse(BASE_URL)?;

    run_crawl(&client, &origin).await
}
