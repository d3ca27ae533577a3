//! Catalog-related DTOs.

use chrono::{DateTime, Utc};
use gamevault_core::Game;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create/update request for a game.
///
/// Field invariants (name/description/category lengths, price range,
/// release date sentinels) are enforced by the domain entity, not here,
/// so the rules cannot drift between create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
}

/// Game representation returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// False when the game is soft-deleted.
    pub active: bool,
}

impl From<&Game> for GameDto {
    fn from(game: &Game) -> Self {
        Self {
            id: game.game_id().into_inner(),
            name: game.name().to_string(),
            description: game.description().to_string(),
            category: game.category().to_string(),
            price: game.price(),
            release_date: game.release_date(),
            created_at: game.created_at(),
            updated_at: game.updated_at(),
            active: game.is_active(),
        }
    }
}

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}
