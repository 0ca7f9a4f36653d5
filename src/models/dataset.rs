use crate::engine::PricingConfig;
use crate::models::ProductRow;

/// The validated rows of one uploaded file plus the context needed to export them.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Label of the source the rows came from, used when naming exports.
    pub source_label: String,
    /// Header row as discovered in the input, in input order.
    pub headers: Vec<String>,
    /// Rows in input order.
    pub rows: Vec<ProductRow>,
    /// Parameters of the last pricing pass, if any.
    pub pricing: Option<PricingConfig>
}

impl Dataset {
    pub fn new(source_label: String, headers: Vec<String>, rows: Vec<ProductRow>) -> Self {
        Self {
            source_label,
            headers,
            rows,
            pricing: None
        }
    }

    pub fn is_calculated(&self) -> bool {
        self.pricing.is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
