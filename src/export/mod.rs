mod errors;
mod import;
mod naming;
mod report;

pub use import::write_import;
pub use naming::{import_file_name, report_file_name};
pub use report::write_report;
