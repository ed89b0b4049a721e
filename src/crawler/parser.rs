//! HTML parser for extracting quotes from listing pages
//!
//! This module handles parsing listing-page HTML to extract:
//! - Quote containers (elements with the `quote` class)
//! - The body text and author attribution within each container
//! - The ordered tag list within each container

use crate::quote::Quote;
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Parses listing-page HTML and extracts all quotes it contains
///
/// # Extraction Rules
///
/// - Each element matching `.quote` is one quote container.
/// - Within a container, `.text` holds the body and `.author` the
///   attribution; both are required. A container missing either is a
///   structural error that aborts the whole parse - the site is assumed
///   well-formed and no fallback is applied.
/// - `.tag` elements within a container become the tag list; zero tags is
///   valid and yields an empty list.
/// - Output preserves document order of containers and, within a
///   container, document order of tags. No deduplication.
///
/// # Arguments
///
/// * `html` - The listing-page HTML to parse
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - One quote per container, in document order
/// * `Err(ScrapeError)` - A container was missing its text or author
///
/// # Example
///
/// ```
/// use quotes_scraper::crawler::parse_quotes;
///
/// let html = r#"<div class="quote">
///     <span class="text">Simplicity is the soul of efficiency.</span>
///     <small class="author">Austin Freeman</small>
///     <a class="tag">simplicity</a>
/// </div>"#;
/// let quotes = parse_quotes(html).unwrap();
/// assert_eq!(quotes.len(), 1);
/// assert_eq!(quotes[0].author, "Austin Freeman");
/// ```
pub fn parse_quotes(html: &str) -> Result<Vec<Quote>> {
    let document = Html::parse_document(html);

    let quote_selector = selector(".quote")?;
    let text_selector = selector(".text")?;
    let author_selector = selector(".author")?;
    let tag_selector = selector(".tag")?;

    let mut quotes = Vec::new();

    for container in document.select(&quote_selector) {
        let text = required_text(&container, &text_selector, "text")?;
        let author = required_text(&container, &author_selector, "author")?;
        let tags = container
            .select(&tag_selector)
            .map(element_text)
            .collect::<Vec<String>>();

        quotes.push(Quote { text, author, tags });
    }

    Ok(quotes)
}

/// Parses a CSS selector, mapping failure into the crate error type
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(e.to_string()))
}

/// Extracts the first sub-element matching `sel`, or fails with the
/// name of the missing field
fn required_text(
    container: &ElementRef,
    sel: &Selector,
    field: &'static str,
) -> Result<String> {
    container
        .select(sel)
        .next()
        .map(element_text)
        .ok_or(ScrapeError::MissingField { field })
}

/// Collects an element's text content, trimmed of surrounding whitespace
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
