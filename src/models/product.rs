use rust_decimal::Decimal;

use crate::models::RawRecord;

/// Derived values appended to a row by a pricing pass.
///
/// Kept together in one struct so a row either carries all three or none of them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pricing {
    /// Recalculated retail price, rounded to cents.
    pub new_price: Decimal,
    /// Realized gross margin at `new_price`, as a percentage rounded to cents.
    pub margin_percent: Decimal,
    /// `new_price - current_price`, rounded to cents.
    pub price_change: Decimal
}

/// A single catalog line item.
///
/// The fields the pricing engine relies on are typed; every original cell of the
/// input row is kept verbatim in `fields` so it can be written back out.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    sku: String,
    /// Display title, or a placeholder when the input had none.
    pub title: String,
    /// Price before recalculation, never negative.
    pub current_price: Decimal,
    /// Unit cost, never negative. Zero means the cost is unknown.
    pub cost_price: Decimal,
    /// Present only after the pricing engine has run.
    pub pricing: Option<Pricing>,
    fields: RawRecord
}

impl ProductRow {
    pub fn new(sku: String, title: String, current_price: Decimal, cost_price: Decimal, fields: RawRecord) -> Self {
        Self {
            sku,
            title,
            current_price,
            cost_price,
            pricing: None,
            fields
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Original cell value for a column, exactly as it was read.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column)
    }

    /// Original cell value at a column position of the input header.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.fields.cell(index)
    }

    /// Returns a copy of this row carrying the given derived values.
    pub fn with_pricing(&self, pricing: Pricing) -> Self {
        Self {
            pricing: Some(pricing),
            ..self.clone()
        }
    }

    pub fn is_zero_cost(&self) -> bool {
        self.cost_price.is_zero()
    }
}
