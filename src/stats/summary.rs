use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use tracing::error;

use crate::models::ProductRow;
use crate::types::format_fixed;

/// Summary figures over a whole dataset, recomputed from the rows on every call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Stats {
    pub total: usize,
    /// Mean realized margin; rows without derived values count as zero.
    pub avg_margin: Decimal,
    pub price_increases: usize,
    pub price_decreases: usize,
    pub zero_cost_count: usize
}

impl Stats {
    /// Average margin as shown to users, with one decimal place.
    pub fn avg_margin_display(&self) -> String {
        format_fixed(self.avg_margin, 1)
    }
}

impl Display for Stats {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "total,{}", self.total)?;
        writeln!(formatter, "avg_margin,{}", self.avg_margin_display())?;
        writeln!(formatter, "price_increases,{}", self.price_increases)?;
        writeln!(formatter, "price_decreases,{}", self.price_decreases)?;
        write!(formatter, "zero_cost,{}", self.zero_cost_count)
    }
}

pub fn summarize(rows: &[ProductRow]) -> Stats {
    let mut margin_sum = Decimal::ZERO;
    let mut price_increases = 0;
    let mut price_decreases = 0;
    let mut zero_cost_count = 0;

    for row in rows {
        if let Some(pricing) = row.pricing {
            match margin_sum.checked_add(pricing.margin_percent) {
                Some(sum) => margin_sum = sum,
                None => error!("Margin sum overflowed at row [{}], leaving its margin out of the average", row.sku())
            }

            if pricing.price_change > Decimal::ZERO {
                price_increases += 1;
            } else if pricing.price_change < Decimal::ZERO {
                price_decreases += 1;
            }
        }

        if row.is_zero_cost() {
            zero_cost_count += 1;
        }
    }

    let avg_margin = if rows.is_empty() {
        Decimal::ZERO
    } else {
        margin_sum / Decimal::from(rows.len())
    };

    Stats {
        total: rows.len(),
        avg_margin,
        price_increases,
        price_decreases,
        zero_cost_count
    }
}
