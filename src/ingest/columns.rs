/// Title given to rows that have none in the input.
pub const TITLE_PLACEHOLDER: &str = "Untitled Product";

/// How the input text is split into a header row and records.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CsvOptions {
    /// The first record names the columns. Must be `true`; reading is rejected otherwise.
    pub has_header: bool,
    /// Strip surrounding whitespace from header names.
    pub trim_headers: bool,
    /// Cells are always read as text; numeric coercion happens during validation only.
    pub infer_types: bool,
    pub delimiter: u8
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            trim_headers: true,
            infer_types: false,
            delimiter: b','
        }
    }
}

/// Exact, case-sensitive column names the validator reads from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColumnMapping {
    pub sku: String,
    pub price: String,
    pub cost: String,
    pub title: String,
    pub handle: String
}

impl ColumnMapping {
    /// Columns that must be present in the header row.
    pub fn required(&self) -> [&str; 2] {
        [self.sku.as_str(), self.price.as_str()]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            sku: "Variant SKU".to_string(),
            price: "Variant Price".to_string(),
            cost: "Cost per item".to_string(),
            title: "Title".to_string(),
            handle: "Handle".to_string()
        }
    }
}
