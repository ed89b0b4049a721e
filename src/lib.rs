//! Quotes-Scraper: a paginated quote harvester
//!
//! This crate implements a small scraping pipeline against a fixed quotes site:
//! it fetches each listing page, extracts the quotes it contains, follows the
//! "next page" link until none remains, and writes the collected quotes to a
//! CSV file.

pub mod crawler;
pub mod output;
pub mod quote;

use thiserror::Error;

/// The fixed origin of the site being scraped.
///
/// Pagination links on the site are site-rooted paths, so every page URL is
/// formed by resolving the link against this origin.
pub const BASE_URL: &str = "https://quotes.toscrape.com";

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Quote block is missing its {field} element")]
    MissingField { field: &'static str },

    #[error("Pagination anchor has no href attribute")]
    MissingHref,

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use crawler::{crawl, run_crawl};
pub use output::write_quotes_csv;
pub use quote::Quote;
