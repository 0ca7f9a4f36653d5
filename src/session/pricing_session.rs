use std::io::Read;

use tracing::info;

use crate::engine::{compute_all, PricingConfig};
use crate::ingest::{read_table, validate, ColumnMapping, CsvOptions};
use crate::models::Dataset;
use crate::session::errors::SessionError;
use crate::stats::{summarize, Stats};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stage {
    Empty,
    Loaded,
    Calculated
}

/// Owns the working dataset and moves it through `Empty -> Loaded -> Calculated`.
///
/// Every mutating operation replaces the dataset as a whole; a failed load leaves
/// the previous dataset in place.
#[derive(Debug, Default)]
pub struct Session {
    options: CsvOptions,
    columns: ColumnMapping,
    dataset: Option<Dataset>
}

impl Session {
    pub fn new(options: CsvOptions, columns: ColumnMapping) -> Self {
        Self {
            options,
            columns,
            dataset: None
        }
    }

    pub fn stage(&self) -> Stage {
        match &self.dataset {
            None => Stage::Empty,
            Some(dataset) if dataset.is_calculated() => Stage::Calculated,
            Some(_) => Stage::Loaded
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn columns(&self) -> &ColumnMapping {
        &self.columns
    }

    /// Reads and validates a new upload, replacing whatever was loaded before.
    ///
    /// # Errors
    /// Returns `SessionError::Ingest` when the input cannot be read or fails validation.
    pub fn load<R: Read>(&mut self, source_label: &str, input: R) -> Result<&Dataset, SessionError> {
        let table = read_table(input, &self.options)?;
        let rows = validate(&table, &self.columns)?;

        info!("Loaded {} rows from [{source_label}]", rows.len());

        let dataset = Dataset::new(source_label.to_string(), table.headers, rows);

        Ok(self.dataset.insert(dataset))
    }

    /// Runs the pricing engine over every loaded row, replacing any earlier results.
    ///
    /// # Errors
    /// Returns `SessionError::NothingLoaded` when no dataset is loaded.
    pub fn calculate(&mut self, config: PricingConfig) -> Result<&Dataset, SessionError> {
        let dataset = self.dataset.as_mut().ok_or(SessionError::NothingLoaded)?;

        dataset.rows = compute_all(&dataset.rows, &config);
        dataset.pricing = Some(config);

        info!("Calculated {} rows using [{}] at [{}%]", dataset.row_count(), config.method(), config.target_percent());

        Ok(dataset)
    }

    pub fn summary(&self) -> Option<Stats> {
        self.dataset.as_ref().map(|dataset| summarize(&dataset.rows))
    }

    pub fn reset(&mut self) {
        if self.dataset.take().is_some() {
            info!("Session reset");
        }
    }
}
