use serde::{Deserialize, Serialize};

/// One catalog listing. Keys are serialized with the site's own labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "상품명")]
    pub name: String,
    #[serde(rename = "가격")]
    pub price: String,
}

/// Tabular preview of the first `limit` records, one row per product with its
/// position in the crawl.
pub fn preview(products: &[Product], limit: usize) -> String {
    let shown = &products[..products.len().min(limit)];
    let name_width = shown
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("상품명".chars().count());

    let mut out = format!("{:<4} {:<name_width$}  {}\n", "", "상품명", "가격");
    for (i, product) in shown.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<name_width$}  {}\n",
            i, product.name, product.price
        ));
    }
    out
}
