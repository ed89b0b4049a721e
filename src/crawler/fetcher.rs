//! HTTP fetcher implementation
//!
//! This module handles the HTTP side of the scraper:
//! - Building the shared HTTP client
//! - GET requests for listing pages
//! - Error classification (transport failure vs. non-success status)
//!
//! There is no retry logic and no request timeout: a failed fetch aborts
//! the whole crawl, and a non-responding server stalls the run.

use crate::{Result, ScrapeError};
use reqwest::Client;

/// Builds the HTTP client used for the entire crawl
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use quotes_scraper::crawler::build_http_client;
///
/// let client = build_http_client().unwrap();
/// ```
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches one listing page and returns its body text
///
/// Issues a single GET request. Any non-2xx status and any transport
/// failure surfaces as a fatal error carrying the offending URL; there is
/// no retry and no partial result.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL of the listing page
///
/// # Returns
///
/// * `Ok(String)` - The decoded response body
/// * `Err(ScrapeError)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}
