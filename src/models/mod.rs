mod dataset;
mod product;
mod record;

use std::fmt;
use std::fmt::{Display, Formatter};

use clap::ValueEnum;

pub use dataset::Dataset;
pub use product::{Pricing, ProductRow};
pub use record::RawRecord;

/// How the target percentage is interpreted when deriving a new price.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum PricingMethod {
    /// Gross margin on price: `(price - cost) / price`.
    Margin,
    /// Markup on cost: `(price - cost) / cost`.
    Markup
}

impl Display for PricingMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PricingMethod::Margin => write!(formatter, "margin"),
            PricingMethod::Markup => write!(formatter, "markup")
        }
    }
}
