//! Shared test doubles for the service tests.

use crate::dto::GameRequest;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use gamevault_core::{Game, GameId, VaultResult};
use gamevault_repository::GameRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory game repository that counts store accesses, so tests can
/// assert which paths touched the store.
pub(crate) struct MockGameRepository {
    games: Mutex<HashMap<GameId, Game>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockGameRepository {
    pub(crate) fn new() -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameRepository for MockGameRepository {
    async fn add(&self, game: &Game) -> VaultResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.games
            .lock()
            .unwrap()
            .insert(game.game_id(), game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game) -> VaultResult<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut games = self.games.lock().unwrap();
        if games.contains_key(&game.game_id()) {
            games.insert(game.game_id(), game.clone());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_by_id(&self, id: GameId, include_deleted: bool) -> VaultResult<Option<Game>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .games
            .lock()
            .unwrap()
            .get(&id)
            .filter(|g| include_deleted || g.is_active())
            .cloned())
    }

    async fn list_all(&self, include_deleted: bool) -> VaultResult<Vec<Game>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let mut games: Vec<Game> = self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|g| include_deleted || g.is_active())
            .cloned()
            .collect();
        games.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(games)
    }

    async fn soft_delete(&self, id: GameId) -> VaultResult<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut games = self.games.lock().unwrap();
        match games.get_mut(&id) {
            Some(game) if game.is_active() => {
                game.soft_delete();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// A request that satisfies every field invariant.
pub(crate) fn game_request(name: &str) -> GameRequest {
    GameRequest {
        id: Uuid::now_v7(),
        name: name.to_string(),
        description: "A sufficiently long catalog description".to_string(),
        category: "Action".to_string(),
        price: 59.90,
        release_date: Utc.with_ymd_and_hms(2021, 3, 12, 0, 0, 0).unwrap(),
    }
}
