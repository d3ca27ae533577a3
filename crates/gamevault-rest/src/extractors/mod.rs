//! Custom Axum extractors.

mod claims;

pub use claims::*;
