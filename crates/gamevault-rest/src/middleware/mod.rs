//! Axum middleware layers.

mod auth;
mod correlation;
mod logging;

pub use auth::*;
pub use correlation::*;
pub use logging::*;
