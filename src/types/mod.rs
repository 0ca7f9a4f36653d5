mod monetary;

pub use monetary::{format_cents, format_fixed, normalize, round_cents};
