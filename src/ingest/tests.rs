use super::{read_table, validate, ColumnMapping, CsvOptions, IngestError, RawTable, TITLE_PLACEHOLDER};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

fn table_from(csv: &str) -> Result<RawTable> {
    Ok(read_table(csv.as_bytes(), &CsvOptions::default())?)
}

#[test]
fn test_read_table_keeps_header_order_and_skips_blank_records() -> Result<()> {
    let table = table_from(" Handle , Variant SKU ,Variant Price\nmug,MUG-1,12.00\n\n,,\nbowl,BOWL-1,8.50\n")?;

    assert_eq!(table.headers, vec!["Handle", "Variant SKU", "Variant Price"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1].get("Variant SKU"), Some("BOWL-1"));

    Ok(())
}

#[test]
fn test_read_table_pads_short_records_and_drops_extra_cells() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price,Cost per item\nMUG-1,12.00\nBOWL-1,8.00,3.00,surplus\n")?;

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].get("Cost per item"), Some(""));
    assert_eq!(table.rows[1].cell(2), Some("3.00"));
    assert_eq!(table.rows[1].cell(3), None);

    Ok(())
}

#[test]
fn test_read_table_honours_custom_delimiter() -> Result<()> {
    let options = CsvOptions { delimiter: b';', ..CsvOptions::default() };
    let table = read_table("Variant SKU;Variant Price\nMUG-1;\"1,200.00\"\n".as_bytes(), &options)?;

    assert_eq!(table.rows[0].get("Variant Price"), Some("1,200.00"));

    Ok(())
}

#[test]
fn test_validate_normalizes_prices_and_fills_placeholders() -> Result<()> {
    let table = table_from("Title,Variant SKU,Variant Price,Cost per item\n,  MUG-1 ,\"$1,234.50\",abc\nBowl,BOWL-1, 12.3 ,$4\n")?;
    let rows = validate(&table, &ColumnMapping::default())?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sku(), "MUG-1");
    assert_eq!(rows[0].title, TITLE_PLACEHOLDER);
    assert_eq!(rows[0].current_price, Decimal::from_str("1234.50")?);
    assert!(rows[0].cost_price.is_zero());
    assert_eq!(rows[1].title, "Bowl");
    assert_eq!(rows[1].current_price, Decimal::from_str("12.3")?);
    assert_eq!(rows[1].cost_price, Decimal::from_str("4")?);
    assert!(rows.iter().all(|row| row.pricing.is_none()));

    Ok(())
}

#[test]
fn test_validate_preserves_pass_through_fields_verbatim() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price,Vendor\nMUG-1,$12.00, Acme Co \n")?;
    let rows = validate(&table, &ColumnMapping::default())?;

    assert_eq!(rows[0].field("Vendor"), Some(" Acme Co "));
    assert_eq!(rows[0].field("Variant Price"), Some("$12.00"));

    Ok(())
}

#[test]
fn test_validate_rejects_empty_dataset() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price\n")?;
    let result = validate(&table, &ColumnMapping::default());

    assert!(matches!(result, Err(IngestError::EmptyDataset)));

    Ok(())
}

#[test]
fn test_validate_names_exactly_the_missing_columns() -> Result<()> {
    let table = table_from("Variant SKU,Price,Cost per item\nMUG-1,12.00,4.00\n")?;
    let result = validate(&table, &ColumnMapping::default());

    match result {
        Err(IngestError::MissingColumns { missing, found }) => {
            assert_eq!(missing, vec!["Variant Price"]);
            assert_eq!(found, vec!["Variant SKU", "Price", "Cost per item"]);
        }
        other => panic!("unexpected result: {other:?}")
    }

    Ok(())
}

#[test]
fn test_validate_column_names_are_case_sensitive() -> Result<()> {
    let table = table_from("variant sku,variant price\nMUG-1,12.00\n")?;
    let result = validate(&table, &ColumnMapping::default());

    assert!(matches!(result, Err(IngestError::MissingColumns { ref missing, .. }) if missing.len() == 2));

    Ok(())
}

#[test]
fn test_validate_missing_cost_column_yields_zero_cost() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price\nMUG-1,12.00\n")?;
    let rows = validate(&table, &ColumnMapping::default())?;

    assert!(rows[0].is_zero_cost());

    Ok(())
}

#[test]
fn test_validate_drops_rows_without_identifier() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price\n,5.00\nMUG-1,12.00\n  ,7.00\n")?;
    let rows = validate(&table, &ColumnMapping::default())?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sku(), "MUG-1");

    Ok(())
}

#[test]
fn test_validate_drops_identifier_equal_to_positional_placeholder() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price\nROW-1,5.00\nROW-1,6.00\n")?;
    let rows = validate(&table, &ColumnMapping::default())?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].current_price, Decimal::from_str("6.00")?);

    Ok(())
}

#[test]
fn test_validate_fails_when_every_row_lacks_identifier() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price\n,5.00\n,6.00\n")?;
    let result = validate(&table, &ColumnMapping::default());

    assert!(matches!(result, Err(IngestError::NoValidRows { .. })));

    Ok(())
}

#[test]
fn test_validate_keeps_duplicate_identifiers_in_order() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price\nMUG-1,5.00\nMUG-1,6.00\n")?;
    let rows = validate(&table, &ColumnMapping::default())?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].current_price, Decimal::from_str("5.00")?);
    assert_eq!(rows[1].current_price, Decimal::from_str("6.00")?);

    Ok(())
}

#[test]
fn test_read_table_requires_header_row() {
    let options = CsvOptions { has_header: false, ..CsvOptions::default() };
    let result = read_table("MUG-1,12.00\n".as_bytes(), &options);

    assert!(matches!(result, Err(IngestError::HeaderRequired)));
}

#[test]
fn test_read_table_keeps_every_cell_of_repeated_columns() -> Result<()> {
    let table = table_from("Variant SKU,Variant Price,Tag,Tag\nA-1,1.00,first,second\n")?;

    assert_eq!(table.headers, vec!["Variant SKU", "Variant Price", "Tag", "Tag"]);
    assert_eq!(table.rows[0].cell(2), Some("first"));
    assert_eq!(table.rows[0].cell(3), Some("second"));

    Ok(())
}
