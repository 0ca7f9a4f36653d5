mod errors;
mod pricing;

pub use pricing::{compute_all, PricingConfig};
