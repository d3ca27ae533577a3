//! Domain entities and value objects.

pub mod game;
pub mod principal;
pub mod role;

pub use game::*;
pub use principal::*;
pub use role::*;
