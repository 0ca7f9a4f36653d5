mod columns;
mod errors;
mod reader;
#[cfg(test)]
mod tests;
mod validator;

pub use columns::{ColumnMapping, CsvOptions, TITLE_PLACEHOLDER};
pub use errors::IngestError;
pub use reader::{read_table, RawTable};
pub use validator::validate;
