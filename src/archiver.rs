use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::models::Product;

/// Writes the products as a 4-space indented JSON array, replacing any
/// existing file. Non-ASCII text is written as-is.
pub fn save_to_file(products: &[Product], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    products.serialize(&mut ser)?;
    writer.flush()?;

    info!(path = %path.display(), count = products.len(), "saved products");
    Ok(())
}
