//! # GameVault Service
//!
//! Business logic service layer for GameVault. Contains the
//! authentication use cases, the catalog services (cached and uncached)
//! and the cache-aside layer they share.

pub mod auth_service;
pub mod cache;
pub mod cached_game_service;
pub mod dto;
pub mod game_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::*;
pub use cache::*;
pub use cached_game_service::*;
pub use dto::*;
pub use game_service::*;
