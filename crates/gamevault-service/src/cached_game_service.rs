//! Cache-aside catalog service (API v2).
//!
//! Reads go through the cache and lazily populate it; every successful
//! mutation invalidates the affected keys. Consistency is maintained by
//! removal, never by patching cached values.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{GameDto, GameRequest};
use crate::game_service::{ensure_ids_match, game_from_request};
use async_trait::async_trait;
use gamevault_core::{GameId, Interface, VaultError, VaultResult};
use gamevault_repository::GameRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Cached catalog service trait.
///
/// Unlike the v1 service, listings and lookups include soft-deleted
/// entries; the `active` flag on the DTO tells them apart.
#[async_trait]
pub trait CachedGameService: Interface + Send + Sync {
    /// Lists all games including soft-deleted ones, serving a cached
    /// snapshot when one exists.
    async fn list_all(&self) -> VaultResult<Vec<GameDto>>;

    /// Fetches a game by ID, serving the cached entry when one exists.
    async fn get_by_id(&self, id: GameId) -> VaultResult<GameDto>;

    /// Creates a new game and invalidates the listing snapshot.
    async fn create(&self, request: GameRequest) -> VaultResult<GameDto>;

    /// Updates a game and invalidates its entry and the listing.
    async fn update(&self, id: GameId, request: GameRequest) -> VaultResult<GameDto>;

    /// Soft-deletes a game and invalidates its entry and the listing.
    async fn delete(&self, id: GameId) -> VaultResult<()>;
}

/// Cache-aside implementation over the game repository.
#[derive(Component)]
#[shaku(interface = CachedGameService)]
pub struct CachedGameServiceImpl {
    #[shaku(inject)]
    game_repository: Arc<dyn GameRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl CachedGameServiceImpl {
    /// Creates a new cached catalog service.
    #[must_use]
    pub fn new(game_repository: Arc<dyn GameRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            game_repository,
            cache,
        }
    }

    /// Drops the per-item and listing keys after a successful mutation.
    async fn invalidate(&self, id: GameId) -> VaultResult<()> {
        self.cache.remove(&cache_keys::game_by_id(id)).await?;
        self.cache.remove(&cache_keys::game_listing()).await?;
        Ok(())
    }
}

#[async_trait]
impl CachedGameService for CachedGameServiceImpl {
    async fn list_all(&self) -> VaultResult<Vec<GameDto>> {
        let key = cache_keys::game_listing();

        if let Some(cached) = self.cache.get::<Vec<GameDto>>(&key).await? {
            debug!("Serving game listing from cache");
            return Ok(cached);
        }

        let games = self.game_repository.list_all(true).await?;
        let dtos: Vec<GameDto> = games.iter().map(GameDto::from).collect();

        self.cache.set(&key, &dtos).await?;
        Ok(dtos)
    }

    async fn get_by_id(&self, id: GameId) -> VaultResult<GameDto> {
        let key = cache_keys::game_by_id(id);

        if let Some(cached) = self.cache.get::<GameDto>(&key).await? {
            debug!("Serving game {} from cache", id);
            return Ok(cached);
        }

        // Absence is never cached; the next read asks the store again.
        let game = self
            .game_repository
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| VaultError::not_found("Game", id))?;

        let dto = GameDto::from(&game);
        self.cache.set(&key, &dto).await?;
        Ok(dto)
    }

    async fn create(&self, request: GameRequest) -> VaultResult<GameDto> {
        debug!("Creating game: {}", request.name);

        let game = game_from_request(&request)?;
        self.game_repository.add(&game).await?;

        // Only the listing snapshot is stale; the per-item key does not
        // exist yet and is not pre-populated.
        self.cache.remove(&cache_keys::game_listing()).await?;

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

        self.invalidate(id).await?;

        info!("Game updated: {}", id);
        Ok(GameDto::from(&game))
    }

    async fn delete(&self, id: GameId) -> VaultResult<()> {
        debug!("Deleting game: {}", id);

        if !self.game_repository.soft_delete(id).await? {
            return Err(VaultError::not_found("Game", id));
        }

        self.invalidate(id).await?;

        info!("Game soft-deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for CachedGameServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedGameServiceImpl")
            .finish_non_exhaustive()
    }
}
