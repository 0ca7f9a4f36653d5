use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Input must start with a header row naming its columns")]
    HeaderRequired,
    #[error("Dataset contains no data rows")]
    EmptyDataset,
    #[error("Missing required columns [{}], found [{}]", missing.join(", "), found.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>
    },
    #[error("No rows have a value in identifier column [{column}]")]
    NoValidRows {
        column: String
    },
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error)
}
