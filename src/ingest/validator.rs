use std::collections::HashSet;

use tracing::{debug, warn};

use crate::ingest::errors::IngestError;
use crate::ingest::{ColumnMapping, RawTable, TITLE_PLACEHOLDER};
use crate::models::{ProductRow, RawRecord};
use crate::types::normalize;

/// Turns raw records into typed product rows.
///
/// # Errors
/// Returns `IngestError` if:
/// - The table has no records.
/// - A required column is absent from the header row.
/// - No record has a real identifier.
pub fn validate(table: &RawTable, columns: &ColumnMapping) -> Result<Vec<ProductRow>, IngestError> {
    if table.rows.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    let missing: Vec<String> = columns.required()
        .into_iter()
        .filter(|required| !table.headers.iter().any(|header| header == *required))
        .map(str::to_string)
        .collect();

    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            missing,
            found: table.headers.clone()
        });
    }

    let rows: Vec<ProductRow> = table.rows.iter()
        .enumerate()
        .filter_map(|(index, record)| to_product_row(index, record, columns))
        .collect();

    if rows.is_empty() {
        return Err(IngestError::NoValidRows { column: columns.sku.clone() });
    }

    report_duplicates(&rows);

    Ok(rows)
}

fn to_product_row(index: usize, record: &RawRecord, columns: &ColumnMapping) -> Option<ProductRow> {
    let placeholder = format!("ROW-{}", index + 1);
    let sku = match cell(record, &columns.sku) {
        "" => placeholder.clone(),
        sku => sku.to_string()
    };

    //NOTE: Any row that ends up with the positional placeholder as its identifier is unusable, even when
    //      the input literally contained that value.
    if sku == placeholder {
        warn!("Dropping row [{}]: no usable identifier in column [{}]", index + 1, columns.sku);
        return None;
    }

    let title = match cell(record, &columns.title) {
        "" => TITLE_PLACEHOLDER.to_string(),
        title => title.to_string()
    };

    let current_price = normalize(cell(record, &columns.price));
    let cost_price = normalize(cell(record, &columns.cost));

    debug!("Row [{}] sku [{sku}] price [{current_price}] cost [{cost_price}]", index + 1);

    Some(ProductRow::new(sku, title, current_price, cost_price, record.clone()))
}

fn cell<'a>(record: &'a RawRecord, column: &str) -> &'a str {
    record.get(column).map(str::trim).unwrap_or_default()
}

fn report_duplicates(rows: &[ProductRow]) {
    let mut seen = HashSet::new();
    let duplicates = rows.iter()
        .filter(|row| !seen.insert(row.sku()))
        .count();

    if duplicates > 0 {
        warn!("{duplicates} rows repeat an identifier already present in the dataset, keeping all of them");
    }
}
