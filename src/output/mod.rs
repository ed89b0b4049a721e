//! Output module for serializing scraped quotes
//!
//! This module handles writing the aggregated quote set to its final
//! on-disk form, a comma-delimited text file.

mod csv;

pub use csv::{format_quotes_csv, write_quotes_csv};
