use chrono::NaiveDate;

pub const IMPORT_PREFIX: &str = "shopify_import";

pub fn report_file_name(source_label: &str, date: NaiveDate) -> String {
    format!("{source_label}_repriced_{}.csv", date.format("%Y-%m-%d"))
}

pub fn import_file_name(date: NaiveDate) -> String {
    format!("{IMPORT_PREFIX}_{}.csv", date.format("%Y-%m-%d"))
}
