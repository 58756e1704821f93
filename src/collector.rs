use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::CrawlConfig;
use crate::error::ConfigError;
use crate::fetcher::{Fetcher, PageSource};
use crate::models::Product;
use crate::parser::Extractor;

/// Walks pages `1..=max_pages`, stopping early at the first page that yields
/// no products. A page that could not be fetched counts as empty.
pub fn collect_pages<S: PageSource>(
    source: &S,
    extractor: &Extractor,
    max_pages: u32,
    delay: Duration,
) -> Vec<Product> {
    let mut all_products = Vec::new();

    for page in 1..=max_pages {
        info!(page, "crawling page");

        let html = match source.fetch_page(page) {
            Ok(html) => html,
            Err(err) => {
                debug!(page, error = %err, "no document for page");
                String::new()
            }
        };

        let page_products = extractor.extract(&html);
        info!(page, count = page_products.len(), "extracted products from page");

        if page_products.is_empty() {
            info!(page, "page has no products, stopping");
            break;
        }

        all_products.extend(page_products);

        thread::sleep(delay);
    }

    all_products
}

/// Full crawl against the configured site.
pub fn crawl(config: &CrawlConfig) -> Result<Vec<Product>, ConfigError> {
    let fetcher = Fetcher::new(config)?;
    let extractor = Extractor::new(&config.markers)?;
    Ok(collect_pages(&fetcher, &extractor, config.max_pages, config.delay))
}
