//! Quote data model

/// A single quote extracted from a listing page
///
/// Quotes have no identity beyond structural equality; two quotes with the
/// same text, author, and tags compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote body text
    pub text: String,

    /// The attributed author
    pub author: String,

    /// Tags attached to the quote, in document order (may be empty)
    pub tags: Vec<String>,
}

impl Quote {
    /// Creates a new quote
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }
}
