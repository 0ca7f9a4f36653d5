use std::io::Read;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::ingest::errors::IngestError;
use crate::ingest::CsvOptions;
use crate::models::RawRecord;

/// Header row plus one positional record per non-blank input line.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>
}

/// Reads delimited text into a `RawTable`.
///
/// Every record is aligned with the header: short records are padded with blank cells
/// and extra cells are discarded. Records whose cells are all blank are skipped.
///
/// # Errors
/// Returns `IngestError::HeaderRequired` when `options` does not declare a header row,
/// since the required columns are located by name.
pub fn read_table<R: Read>(input: R, options: &CsvOptions) -> Result<RawTable, IngestError> {
    if !options.has_header {
        return Err(IngestError::HeaderRequired);
    }

    if options.infer_types {
        warn!("Type inference is not supported, every cell is read as text");
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .trim(if options.trim_headers { Trim::Headers } else { Trim::None })
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            debug!("Skipping blank record [{}]", index + 1);
            continue;
        }

        let row: RawRecord = headers.iter()
            .enumerate()
            .map(|(position, header)| (header.clone(), record.get(position).unwrap_or_default().to_string()))
            .collect();

        rows.push(row);
    }

    debug!("Read {} records with headers [{}]", rows.len(), headers.join(", "));

    Ok(RawTable { headers, rows })
}
