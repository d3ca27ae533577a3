//! # GameVault Server Library
//!
//! Dependency injection wiring and startup utilities for the
//! GameVault server application.

pub mod di;
pub mod startup;
