//! Uncached catalog service (API v1).

use crate::dto::{GameDto, GameRequest};
use async_trait::async_trait;
use gamevault_core::{Game, GameId, Interface, VaultError, VaultResult};
use gamevault_repository::GameRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog service trait. Every read and write goes straight to the
/// store.
#[async_trait]
pub trait GameService: Interface + Send + Sync {
    /// Lists active games ordered by name.
    async fn list(&self) -> VaultResult<Vec<GameDto>>;

    /// Lists all games including soft-deleted ones, ordered by name.
    async fn list_with_deleted(&self) -> VaultResult<Vec<GameDto>>;

    /// Fetches an active game by ID.
    async fn get(&self, id: GameId) -> VaultResult<GameDto>;

    /// Creates a new game.
    async fn create(&self, request: GameRequest) -> VaultResult<GameDto>;

    /// Updates an existing game. The path ID must match the body ID.
    async fn update(&self, id: GameId, request: GameRequest) -> VaultResult<GameDto>;

    /// Soft-deletes a game.
    async fn delete(&self, id: GameId) -> VaultResult<()>;
}

/// Uncached catalog service implementation.
#[derive(Component)]
#[shaku(interface = GameService)]
pub struct GameServiceImpl {
    #[shaku(inject)]
    game_repository: Arc<dyn GameRepository>,
}

impl GameServiceImpl {
    /// Creates a new catalog service.
    #[must_use]
    pub fn new(game_repository: Arc<dyn GameRepository>) -> Self {
        Self { game_repository }
    }
}

/// Shared by the cached and uncached services: builds a new domain
/// entity from a request, running all field invariants.
pub(crate) fn game_from_request(request: &GameRequest) -> VaultResult<Game> {
    Game::new(
        GameId::from_uuid(request.id),
        request.name.clone(),
        request.description.clone(),
        request.category.clone(),
        request.price,
        request.release_date,
    )
}

/// Rejects requests whose body ID contradicts the path ID. Runs before
/// any store access.
pub(crate) fn ensure_ids_match(path_id: GameId, request: &GameRequest) -> VaultResult<()> {
    if path_id.into_inner() != request.id {
        return Err(VaultError::Conflict(
            "Request body ID does not match the path ID".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl GameService for GameServiceImpl {
    async fn list(&self) -> VaultResult<Vec<GameDto>> {
        let games = self.game_repository.list_all(false).await?;
        Ok(games.iter().map(GameDto::from).collect())
    }

    async fn list_with_deleted(&self) -> VaultResult<Vec<GameDto>> {
        let games = self.game_repository.list_all(true).await?;
        Ok(games.iter().map(GameDto::from).collect())
    }

    async fn get(&self, id: GameId) -> VaultResult<GameDto> {
        let game = self
            .game_repository
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| VaultError::not_found("Game", id))?;
        Ok(GameDto::from(&game))
    }

    async fn create(&self, request: GameRequest) -> VaultResult<GameDto> {
        debug!("Creating game: {}", request.name);

        let game = game_from_request(&request)?;
        self.game_repository.add(&game).await?;

        info!("Game created: {}", game.game_id());
        Ok(GameDto::from(&game))
    }

    async fn update(&self, id: GameId, request: GameRequest) -> VaultResult<GameDto> {
        debug!("Updating game: {}", id);

        ensure_ids_match(id, &request)?;

        let mut game = self
            .game_repository
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| VaultError::not_found("Game", id))?;

        game.update(
            request.name,
            request.description,
            request.category,
            request.price,
            request.release_date,
        )?;

        if !self.game_repository.update(&game).await? {
            return Err(VaultError::not_found("Game", id));
        }

        info!("Game updated: {}", id);
        Ok(GameDto::from(&game))
    }

    async fn delete(&self, id: GameId) -> VaultResult<()> {
        debug!("Deleting game: {}", id);

        if !self.game_repository.soft_delete(id).await? {
            return Err(VaultError::not_found("Game", id));
        }

        info!("Game soft-deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for GameServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{game_request, MockGameRepository};
    use chrono::{TimeZone, Utc};

    fn create_service(repo: Arc<MockGameRepository>) -> GameServiceImpl {
        GameServiceImpl::new(repo)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = Arc::new(MockGameRepository::new());
        let service = create_service(repo.clone());

        let request = game_request("Hades");
        let created = service.create(request.clone()).await.unwrap();
        assert_eq!(created.name, "Hades");
        assert!(created.active);

        let fetched = service.get(GameId::from_uuid(request.id)).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let repo = Arc::new(MockGameRepository::new());
        let service = create_service(repo.clone());

        let mut request = game_request("abc"); // too short
        request.name = "abc".to_string();

        let result = service.create(request).await;
        assert!(matches!(result, Err(VaultError::Validation(_))));
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn test_get_absent_returns_not_found() {
        let service = create_service(Arc::new(MockGameRepository::new()));
        let result = service.get(GameId::new()).await;
        assert!(matches!(result, Err(VaultError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_excludes_soft_deleted() {
        let repo = Arc::new(MockGameRepository::new());
        let service = create_service(repo.clone());

        let keep = game_request("Keeper Game");
        let drop = game_request("Dropped Game");
        service.create(keep).await.unwrap();
        service.create(drop.clone()).await.unwrap();
        service.delete(GameId::from_uuid(drop.id)).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Keeper Game");

        let all = service.list_with_deleted().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_update_id_mismatch_is_conflict() {
        let repo = Arc::new(MockGameRepository::new());
        let service = create_service(repo.clone());

        let request = game_request("Some Game");
        let result = service.update(GameId::new(), request).await;
        assert!(matches!(result, Err(VaultError::Conflict(_))));
        // Rejected before any store access.
        assert_eq!(repo.read_count(), 0);
    }

    #[tokio::test]
    async fn test_update_applies_new_values() {
        let repo = Arc::new(MockGameRepository::new());
        let service = create_service(repo.clone());

        let mut request = game_request("Original Name");
        service.create(request.clone()).await.unwrap();

        request.name = "Renamed Game".to_string();
        request.price = 79.90;
        request.release_date = Utc.with_ymd_and_hms(2022, 9, 1, 0, 0, 0).unwrap();

        let updated = service
            .update(GameId::from_uuid(request.id), request.clone())
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed Game");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_absent_returns_not_found() {
        let service = create_service(Arc::new(MockGameRepository::new()));
        let request = game_request("Ghost Game");
        let result = service.update(GameId::from_uuid(request.id), request).await;
        assert!(matches!(result, Err(VaultError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_absent_returns_not_found() {
        let service = create_service(Arc::new(MockGameRepository::new()));
        let result = service.delete(GameId::new()).await;
        assert!(matches!(result, Err(VaultError::NotFound { .. })));
    }
}
