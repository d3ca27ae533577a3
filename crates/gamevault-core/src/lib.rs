//! # GameVault Core
//!
//! Core types, traits, and error definitions for the GameVault catalog
//! service. This crate provides the foundational abstractions used across
//! all layers of the workspace.

pub mod domain;
pub mod error;
pub mod id;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
