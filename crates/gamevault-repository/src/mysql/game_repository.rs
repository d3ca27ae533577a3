//! MySQL game repository implementation.

use crate::{traits::GameRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gamevault_core::{Game, GameId, VaultError, VaultResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL game repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = GameRepository)]
pub struct MySqlGameRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlGameRepository {
    /// Creates a new MySQL game repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a game.
#[derive(Debug, FromRow)]
struct GameRow {
    id: String, // UUID stored as CHAR(36)
    name: String,
    description: String,
    category: String,
    price: f64,
    release_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    deleted: bool,
}

impl TryFrom<GameRow> for Game {
    type Error = VaultError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| VaultError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Game::from_parts(
            GameId::from_uuid(id),
            row.name,
            row.description,
            row.category,
            row.price,
            row.release_date,
            row.created_at,
            row.updated_at,
            row.deleted,
        ))
    }
}

const GAME_COLUMNS: &str =
    "id, name, description, category, price, release_date, created_at, updated_at, deleted";

#[async_trait]
impl GameRepository for MySqlGameRepository {
    async fn add(&self, game: &Game) -> VaultResult<()> {
        debug!("Inserting game: {}", game.game_id());

        sqlx::query(
            r#"
            INSERT INTO games (id, name, description, category, price, release_date,
                               created_at, updated_at, deleted)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(game.game_id().into_inner().to_string())
        .bind(game.name())
        .bind(game.description())
        .bind(game.category())
        .bind(game.price())
        .bind(game.release_date())
        .bind(game.created_at())
        .bind(game.updated_at())
        .bind(game.is_deleted())
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn update(&self, game: &Game) -> VaultResult<bool> {
        debug!("Updating game: {}", game.game_id());

        let result = sqlx::query(
            r#"
            UPDATE games
            SET name = ?, description = ?, category = ?, price = ?,
                release_date = ?, updated_at = ?, deleted = ?
            WHERE id = ?
            "#,
        )
        .bind(game.name())
        .bind(game.description())
        .bind(game.category())
        .bind(game.price())
        .bind(game.release_date())
        .bind(game.updated_at())
        .bind(game.is_deleted())
        .bind(game.game_id().into_inner().to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: GameId, include_deleted: bool) -> VaultResult<Option<Game>> {
        debug!("Finding game by id: {}", id);

        let sql = if include_deleted {
            format!("SELECT {} FROM games WHERE id = ?", GAME_COLUMNS)
        } else {
            format!(
                "SELECT {} FROM games WHERE id = ? AND deleted = FALSE",
                GAME_COLUMNS
            )
        };

        let row = sqlx::query_as::<_, GameRow>(&sql)
            .bind(id.into_inner().to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Game::try_from).transpose()
    }

    async fn list_all(&self, include_deleted: bool) -> VaultResult<Vec<Game>> {
        debug!("Listing games, include_deleted: {}", include_deleted);

        let sql = if include_deleted {
            format!("SELECT {} FROM games ORDER BY name ASC", GAME_COLUMNS)
        } else {
            format!(
                "SELECT {} FROM games WHERE deleted = FALSE ORDER BY name ASC",
                GAME_COLUMNS
            )
        };

        let rows = sqlx::query_as::<_, GameRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Game::try_from).collect()
    }

    async fn soft_delete(&self, id: GameId) -> VaultResult<bool> {
        debug!("Soft deleting game: {}", id);

        let result = sqlx::query("UPDATE games SET deleted = TRUE WHERE id = ? AND deleted = FALSE")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlGameRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlGameRepository").finish_non_exhaustive()
    }
}
