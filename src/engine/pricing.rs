use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::engine::errors::PricingError;
use crate::models::{Pricing, PricingMethod, ProductRow};
use crate::types::round_cents;

/// Validated pricing parameters.
///
/// A margin target of 100% or more has no finite price solving it, so it is rejected
/// when the configuration is built. Every configuration that exists can be applied
/// to any row.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PricingConfig {
    method: PricingMethod,
    target_percent: Decimal
}

impl PricingConfig {
    /// # Errors
    /// Returns `PricingError::InvalidTarget` for a margin target of 100% or more.
    pub fn new(method: PricingMethod, target_percent: Decimal) -> Result<Self, PricingError> {
        if method == PricingMethod::Margin && target_percent >= Decimal::ONE_HUNDRED {
            return Err(PricingError::InvalidTarget { method, target_percent });
        }

        Ok(Self { method, target_percent })
    }

    pub fn method(&self) -> PricingMethod {
        self.method
    }

    pub fn target_percent(&self) -> Decimal {
        self.target_percent
    }
}

/// Derives the new price, realized margin and price change for one row.
///
/// Rows with an unknown (zero) cost keep their current price. The returned row is a
/// function of `cost_price` and `current_price` only, so any previously derived values
/// on the input are replaced, never accumulated.
pub fn compute_price(row: &ProductRow, config: &PricingConfig) -> ProductRow {
    if row.is_zero_cost() {
        debug!("Row [{}] has no cost, keeping price [{}]", row.sku(), row.current_price);
        return row.with_pricing(unchanged(row));
    }

    match derive(row, config) {
        Some(pricing) => {
            debug!("Row [{}] repriced [{}] -> [{}] at [{}%] margin", row.sku(), row.current_price, pricing.new_price, pricing.margin_percent);
            row.with_pricing(pricing)
        }
        None => {
            warn!("Row [{}] overflowed while pricing with cost [{}], keeping price [{}]", row.sku(), row.cost_price, row.current_price);
            row.with_pricing(unchanged(row))
        }
    }
}

/// Applies `compute_price` to every row, preserving order.
pub fn compute_all(rows: &[ProductRow], config: &PricingConfig) -> Vec<ProductRow> {
    rows.iter().map(|row| compute_price(row, config)).collect()
}

fn unchanged(row: &ProductRow) -> Pricing {
    Pricing {
        new_price: row.current_price,
        margin_percent: Decimal::ZERO,
        price_change: Decimal::ZERO
    }
}

fn derive(row: &ProductRow, config: &PricingConfig) -> Option<Pricing> {
    let ratio = config.target_percent.checked_div(Decimal::ONE_HUNDRED)?;

    let raw_price = match config.method {
        PricingMethod::Margin => row.cost_price.checked_div(Decimal::ONE.checked_sub(ratio)?)?,
        PricingMethod::Markup => row.cost_price.checked_mul(Decimal::ONE.checked_add(ratio)?)?
    };

    let new_price = round_cents(raw_price);
    let margin_percent = realized_margin(new_price, row.cost_price)?;
    let price_change = round_cents(new_price.checked_sub(row.current_price)?);

    Some(Pricing { new_price, margin_percent, price_change })
}

/// Gross margin at `price`, as a percentage rounded to cents. Zero when the price is not positive.
fn realized_margin(price: Decimal, cost: Decimal) -> Option<Decimal> {
    if price <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let margin = price.checked_sub(cost)?
        .checked_div(price)?
        .checked_mul(Decimal::ONE_HUNDRED)?;

    Some(round_cents(margin))
}
