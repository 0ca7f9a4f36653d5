mod summary;

pub use summary::{summarize, Stats};
