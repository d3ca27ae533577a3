//! # GameVault Security
//!
//! Security module for GameVault providing JWT token issuance and
//! validation plus Argon2 password hashing.

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::*;
pub use password::*;
pub use rbac::*;
