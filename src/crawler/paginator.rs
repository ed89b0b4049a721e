//! Pagination link resolution
//!
//! Listing pages carry a pagination control; when a further page exists it
//! contains a "next" anchor whose href is a site-rooted path. This module
//! locates that anchor and resolves it against the fixed origin.

use crate::{Result, ScrapeError};
use scraper::Html;
use url::Url;

use super::parser::selector;

/// Finds the "next page" link in listing-page HTML, if any
///
/// Looks for the anchor inside the pagination control (`.next > a`). The
/// href is assumed to be a path rooted at the scraped origin, so resolving
/// it against `base` yields the origin concatenated with the path. No
/// cross-origin validation is performed, and nothing bounds how many times
/// a crawl may follow next links - termination relies on the site
/// eventually omitting the anchor.
///
/// # Arguments
///
/// * `html` - The listing-page HTML
/// * `base` - The fixed origin to resolve the relative href against
///
/// # Returns
///
/// * `Ok(Some(String))` - Absolute URL of the next listing page
/// * `Ok(None)` - No "next" anchor present; the crawl is on the last page
/// * `Err(ScrapeError)` - The anchor exists but has no href, or the href
///   does not resolve
pub fn next_page_url(html: &str, base: &Url) -> Result<Option<String>> {
    let document = Html::parse_document(html);
    let next_selector = selector(".next > a")?;

    match document.select(&next_selector).next() {
        Some(anchor) => {
            let href = anchor.value().attr("href").ok_or(ScrapeError::MissingHref)?;
            let absolute = base.join(href)?;
            Ok(Some(absolute.to_string()))
        }
        None => Ok(None),
    }
}
