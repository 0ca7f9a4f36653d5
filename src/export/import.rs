use std::io::Write;

use csv::Writer;
use serde::Serialize;
use tracing::debug;

use crate::export::errors::ExportError;
use crate::ingest::ColumnMapping;
use crate::models::{Dataset, ProductRow};
use crate::types::format_cents;

/// One line of the storefront product import file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ImportRecord {
    #[serde(rename = "Handle")]
    pub handle: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Variant SKU")]
    pub sku: String,
    #[serde(rename = "Variant Price")]
    pub price: String,
    #[serde(rename = "Cost per item")]
    pub cost: String
}

impl ImportRecord {
    /// Projects a row, preferring the recalculated price and an existing handle.
    pub fn from_row(row: &ProductRow, columns: &ColumnMapping) -> Self {
        let handle = match row.field(&columns.handle).map(str::trim) {
            Some(handle) if !handle.is_empty() => handle.to_string(),
            _ => derive_handle(row.sku())
        };

        let price = row.pricing
            .map(|pricing| pricing.new_price)
            .unwrap_or(row.current_price);

        Self {
            handle,
            title: row.title.clone(),
            sku: row.sku().to_string(),
            price: format_cents(price),
            cost: format_cents(row.cost_price)
        }
    }
}

/// Lower-cases the identifier and collapses every run of other characters into one hyphen.
pub fn derive_handle(sku: &str) -> String {
    let mut handle = String::with_capacity(sku.len());
    let mut in_separator = false;

    for character in sku.chars().flat_map(char::to_lowercase) {
        if character.is_ascii_alphanumeric() {
            handle.push(character);
            in_separator = false;
        } else if !in_separator {
            handle.push('-');
            in_separator = true;
        }
    }

    handle
}

pub fn write_import<W: Write>(dataset: &Dataset, columns: &ColumnMapping, output: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(output);

    for row in &dataset.rows {
        writer.serialize(ImportRecord::from_row(row, columns))?;
    }

    writer.flush()?;

    debug!("Wrote import file for [{}] with {} rows", dataset.source_label, dataset.row_count());

    Ok(())
}
