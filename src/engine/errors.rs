use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PricingMethod;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Target [{target_percent}%] is not valid for the [{method}] method, it must be below 100%")]
    InvalidTarget {
        method: PricingMethod,
        target_percent: Decimal
    }
}
