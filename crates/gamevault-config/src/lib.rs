//! # GameVault Config
//!
//! Configuration management for GameVault. Resolves layered configuration
//! (defaults, environment files, `GAMEVAULT_` environment variables) into
//! typed sections consumed by the other crates.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
