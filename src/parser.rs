use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::{Markers, NAME_PLACEHOLDER, PRICE_PLACEHOLDER};
use crate::error::ConfigError;
use crate::models::Product;

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

pub struct Extractor {
    item: Selector,
    name: Selector,
    price: Selector,
}

impl Extractor {
    pub fn new(markers: &Markers) -> Result<Self, ConfigError> {
        Ok(Self {
            item: parse_selector(&markers.item)?,
            name: parse_selector(&markers.name)?,
            price: parse_selector(&markers.price)?,
        })
    }

    /// One product per item block, in document order. Nested blocks are
    /// matched on their own as well as inside their parent.
    pub fn extract(&self, html: &str) -> Vec<Product> {
        let doc = Html::parse_document(html);
        doc.select(&self.item).map(|item| self.parse_item(item)).collect()
    }

    fn parse_item(&self, item: ElementRef) -> Product {
        let name = item
            .select(&self.name)
            .next()
            .map(stripped_text)
            .unwrap_or_else(|| NAME_PLACEHOLDER.into());

        let price = item
            .select(&self.price)
            .next()
            .map(|e| digits_only(&stripped_text(e)))
            .unwrap_or_else(|| PRICE_PLACEHOLDER.into());

        Product { name, price }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Each text node trimmed, then glued together without a separator.
fn stripped_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

pub fn digits_only(text: &str) -> String {
    NON_DIGIT.replace_all(text, "").into_owned()
}
