use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sclocal_crawler::config::CrawlConfig;
use sclocal_crawler::{archiver, collector, models};

const PREVIEW_ROWS: usize = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = CrawlConfig::default();

    println!("Crawling products from {}...", config.base_url);
    let products = collector::crawl(&config)?;

    println!("\nCrawled {} products in total.", products.len());
    println!("\nSample:");
    print!("{}", models::preview(&products, PREVIEW_ROWS));

    archiver::save_to_file(&products, &config.output)?;
    println!("Products saved to {}.", config.output.display());
    Ok(())
}
