mod errors;
mod pricing_session;

pub use pricing_session::Session;
