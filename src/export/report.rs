use std::io::Write;

use csv::Writer;
use tracing::debug;

use crate::export::errors::ExportError;
use crate::models::{Dataset, ProductRow};
use crate::types::format_cents;

/// Columns appended after the original ones in the full report.
pub const DERIVED_COLUMNS: [&str; 4] = ["new_price", "margin_percent", "price_change", "new_price_formatted"];

/// Writes every original column followed by the derived columns, one record per row.
///
/// Original columns that share a name with a derived column (a report fed back in as
/// input) are left out so the derived values are never duplicated.
pub fn write_report<W: Write>(dataset: &Dataset, output: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(output);

    let original: Vec<(usize, &str)> = dataset.headers.iter()
        .map(String::as_str)
        .enumerate()
        .filter(|(_, header)| !DERIVED_COLUMNS.contains(header))
        .collect();

    writer.write_record(original.iter().map(|(_, header)| *header).chain(DERIVED_COLUMNS))?;

    for row in &dataset.rows {
        let mut record: Vec<String> = original.iter()
            .map(|(position, _)| row.cell(*position).unwrap_or_default().to_string())
            .collect();

        record.extend(derived_cells(row));
        writer.write_record(&record)?;
    }

    writer.flush()?;

    debug!("Wrote report for [{}] with {} rows", dataset.source_label, dataset.row_count());

    Ok(())
}

fn derived_cells(row: &ProductRow) -> [String; 4] {
    match row.pricing {
        Some(pricing) => [
            format_cents(pricing.new_price),
            format_cents(pricing.margin_percent),
            format_cents(pricing.price_change),
            format_cents(pricing.new_price)
        ],
        None => [String::new(), String::new(), String::new(), format_cents(row.current_price)]
    }
}
