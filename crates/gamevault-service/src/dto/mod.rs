//! Data transfer objects.

mod auth_dto;
mod game_dto;

pub use auth_dto::*;
pub use game_dto::*;
