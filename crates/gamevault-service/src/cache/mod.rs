//! Cache abstraction and in-memory implementation.

pub mod cache_keys;
mod cache_interface;
mod memory_cache;

pub use cache_interface::*;
pub use memory_cache::*;
