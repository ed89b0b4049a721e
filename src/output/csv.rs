//! CSV serialization of scraped quotes
//!
//! The output file is UTF-8, comma-delimited, with a fixed `text,author,tags`
//! header and one row per quote. The tags column is a stringified list
//! (`['love', 'inspirational']`), not a nested CSV encoding - downstream
//! consumers parse that sub-field with a list-literal parser. This rendering
//! is load-bearing for existing consumers of the file.

use crate::quote::Quote;
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the quote set to a CSV file at `output_path`
///
/// Truncates any existing file at the destination. On a write failure the
/// destination may be left truncated or partially written; no cleanup is
/// attempted.
///
/// # Arguments
///
/// * `quotes` - The quotes to serialize, in output order
/// * `output_path` - Path of the CSV file to create
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote all rows
/// * `Err(ScrapeError)` - The destination could not be created or written
pub fn write_quotes_csv(quotes: &[Quote], output_path: &Path) -> Result<()> {
    let csv = format_quotes_csv(quotes);

    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;

    Ok(())
}

/// Formats the quote set as CSV text
///
/// # Arguments
///
/// * `quotes` - The quotes to serialize, in output order
///
/// # Returns
///
/// The full file content, header row included
pub fn format_quotes_csv(quotes: &[Quote]) -> String {
    let mut out = String::new();
    out.push_str("text,author,tags\n");

    for quote in quotes {
        out.push_str(&csv_field(&quote.text));
        out.push(',');
        out.push_str(&csv_field(&quote.author));
        out.push(',');
        out.push_str(&csv_field(&format_tag_list(&quote.tags)));
        out.push('\n');
    }

    out
}

/// Quotes a field when it contains a delimiter, quote, or line break;
/// inner double quotes are doubled
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the tag sequence as a stringified list: `['a', 'b']`, `[]` when empty
fn format_tag_list(tags: &[String]) -> String {
    let quoted = tags
        .iter()
        .map(|tag| format!("'{}'", tag))
        .collect::<Vec<String>>();

    format!("[{}]", quoted.join(", "))
}
