//! Quotes-Scraper main entry point
//!
//! This is the command-line interface for the quotes scraper. It runs the
//! full crawl-then-write pipeline synchronously and exits nonzero on the
//! first unrecovered error.

use clap::Parser;
use quotes_scraper::crawler::crawl;
use quotes_scraper::output::write_quotes_csv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quotes-Scraper: a paginated quote harvester
///
/// Scrapes every listing page of the quotes site, following "next" links
/// until the last page, and writes the collected quotes to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "quotes-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Scrape a paginated quotes site into a CSV file", long_about = None)]
struct Cli {
    /// Path of the CSV file to write
    #[arg(value_name = "OUTPUT", default_value = "quotes.csv")]
    output: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let quotes = crawl().await?;

    tracing::info!(
        "Writing {} quotes to {}",
        quotes.len(),
        cli.output.display()
    );
    write_quotes_csv(&quotes, &cli.output)?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotes_scraper=info,warn"),
            1 => EnvFilter::new("quotes_scraper=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
