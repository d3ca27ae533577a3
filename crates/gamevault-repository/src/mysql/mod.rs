//! MySQL repository implementations.

mod game_repository;
mod principal_repository;

pub use game_repository::*;
pub use principal_repository::*;
