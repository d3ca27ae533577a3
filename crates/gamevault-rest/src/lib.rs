//! # GameVault REST
//!
//! REST API layer using Axum for GameVault.
//! Provides HTTP endpoints for authentication, the game catalog (v1)
//! and the cached game catalog (v2), plus health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
