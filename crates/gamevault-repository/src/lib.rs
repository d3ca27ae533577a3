//! # GameVault Repository
//!
//! Data access layer for GameVault. Services depend on the
//! [`PrincipalRepository`] and [`GameRepository`] traits; the `mysql`
//! module provides the SQLx-backed implementations.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use gamevault_core::{Game, GameId, Principal, PrincipalId, Role, VaultResult};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory principal store shared between the repository and its
    /// units of work.
    type PrincipalStore = Arc<Mutex<HashMap<PrincipalId, Principal>>>;

    struct InMemoryPrincipalRepository {
        principals: PrincipalStore,
    }

    impl InMemoryPrincipalRepository {
        fn new() -> Self {
            Self {
                principals: Arc::new(Mutex::new(HashMap::new())),
            }
        }
    }

    /// Buffers writes and applies them to the shared store on commit only.
    struct InMemoryUnitOfWork {
        store: PrincipalStore,
        staged: Vec<Principal>,
        staged_roles: Vec<(PrincipalId, Role)>,
    }

    #[async_trait]
    impl PrincipalRepository for InMemoryPrincipalRepository {
        async fn find_by_id(&self, id: PrincipalId) -> VaultResult<Option<Principal>> {
            Ok(self.principals.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> VaultResult<Option<Principal>> {
            Ok(self
                .principals
                .lock()
                .unwrap()
                .values()
                .find(|p| p.username == username)
                .cloned())
        }

        async fn exists_by_username(&self, username: &str) -> VaultResult<bool> {
            Ok(self
                .principals
                .lock()
                .unwrap()
                .values()
                .any(|p| p.username == username))
        }

        async fn begin(&self) -> VaultResult<Box<dyn PrincipalUnitOfWork>> {
            Ok(Box::new(InMemoryUnitOfWork {
                store: self.principals.clone(),
                staged: Vec::new(),
                staged_roles: Vec::new(),
            }))
        }
    }

    #[async_trait]
    impl PrincipalUnitOfWork for InMemoryUnitOfWork {
        async fn create(&mut self, principal: &Principal) -> VaultResult<()> {
            self.staged.push(principal.clone());
            Ok(())
        }

        async fn add_role(&mut self, id: PrincipalId, role: Role) -> VaultResult<()> {
            self.staged_roles.push((id, role));
            Ok(())
        }

        async fn commit(self: Box<Self>) -> VaultResult<()> {
            let mut store = self.store.lock().unwrap();
            for principal in self.staged {
                store.insert(principal.id, principal);
            }
            for (id, role) in self.staged_roles {
                if let Some(principal) = store.get_mut(&id) {
                    principal.grant_role(role);
                }
            }
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> VaultResult<()> {
            Ok(())
        }
    }

    struct InMemoryGameRepository {
        games: Mutex<HashMap<GameId, Game>>,
    }

    impl InMemoryGameRepository {
        fn new() -> Self {
            Self {
                games: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl GameRepository for InMemoryGameRepository {
        async fn add(&self, game: &Game) -> VaultResult<()> {
            self.games
                .lock()
                .unwrap()
                .insert(game.game_id(), game.clone());
            Ok(())
        }

        async fn update(&self, game: &Game) -> VaultResult<bool> {
            let mut games = self.games.lock().unwrap();
            if games.contains_key(&game.game_id()) {
                games.insert(game.game_id(), game.clone());
                Ok(true)
            } else {
                Ok(false)
            }
        }

        async fn find_by_id(&self, id: GameId, include_deleted: bool) -> VaultResult<Option<Game>> {
            Ok(self
                .games
                .lock()
                .unwrap()
                .get(&id)
                .filter(|g| include_deleted || g.is_active())
                .cloned())
        }

        async fn list_all(&self, include_deleted: bool) -> VaultResult<Vec<Game>> {
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

    fn create_principal(username: &str) -> Principal {
        Principal::new(
            username,
            format!("{}@example.com", username),
            "Test User",
            "hashed_password",
        )
    }

    fn create_game(name: &str) -> Game {
        Game::new(
            GameId::new(),
            name,
            "A reasonably long description",
            "Action",
            59.90,
            Utc.with_ymd_and_hms(2021, 3, 12, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_commit_makes_principal_visible() {
        let repo = InMemoryPrincipalRepository::new();
        let principal = create_principal("newuser");
        let id = principal.id;

        let mut uow = repo.begin().await.unwrap();
        uow.create(&principal).await.unwrap();
        uow.add_role(id, Role::User).await.unwrap();
        uow.commit().await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.username, "newuser");
        assert!(found.has_role(Role::User));
    }

    #[tokio::test]
    async fn test_rollback_discards_principal_and_roles() {
        let repo = InMemoryPrincipalRepository::new();
        let principal = create_principal("ghost");
        let id = principal.id;

        let mut uow = repo.begin().await.unwrap();
        uow.create(&principal).await.unwrap();
        uow.add_role(id, Role::User).await.unwrap();
        uow.rollback().await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(!repo.exists_by_username("ghost").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let repo = InMemoryPrincipalRepository::new();
        let principal = create_principal("alice");

        let mut uow = repo.begin().await.unwrap();
        uow.create(&principal).await.unwrap();
        uow.commit().await.unwrap();

        assert!(repo.find_by_username("alice").await.unwrap().is_some());
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_and_find_game() {
        let repo = InMemoryGameRepository::new();
        let game = create_game("Hades");
        repo.add(&game).await.unwrap();

        let found = repo.find_by_id(game.game_id(), false).await.unwrap();
        assert_eq!(found.unwrap().name(), "Hades");
    }

    #[tokio::test]
    async fn test_soft_deleted_game_hidden_from_default_reads() {
        let repo = InMemoryGameRepository::new();
        let game = create_game("Celeste");
        let id = game.game_id();
        repo.add(&game).await.unwrap();

        assert!(repo.soft_delete(id).await.unwrap());

        assert!(repo.find_by_id(id, false).await.unwrap().is_none());
        let with_deleted = repo.find_by_id(id, true).await.unwrap().unwrap();
        assert!(with_deleted.is_deleted());
    }

    #[tokio::test]
    async fn test_soft_delete_absent_game_returns_false() {
        let repo = InMemoryGameRepository::new();
        assert!(!repo.soft_delete(GameId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn test_soft_delete_twice_returns_false() {
        let repo = InMemoryGameRepository::new();
        let game = create_game("Undertale");
        repo.add(&game).await.unwrap();

        assert!(repo.soft_delete(game.game_id()).await.unwrap());
        assert!(!repo.soft_delete(game.game_id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_name() {
        let repo = InMemoryGameRepository::new();
        repo.add(&create_game("Zelda-like")).await.unwrap();
        repo.add(&create_game("Astro Racer")).await.unwrap();
        repo.add(&create_game("Metroidvania")).await.unwrap();

        let games = repo.list_all(false).await.unwrap();
        let names: Vec<&str> = games.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Astro Racer", "Metroidvania", "Zelda-like"]);
    }

    #[tokio::test]
    async fn test_list_all_includes_deleted_when_requested() {
        let repo = InMemoryGameRepository::new();
        let game = create_game("Firewatch");
        repo.add(&game).await.unwrap();
        repo.add(&create_game("Inside Story")).await.unwrap();
        repo.soft_delete(game.game_id()).await.unwrap();

        assert_eq!(repo.list_all(false).await.unwrap().len(), 1);
        assert_eq!(repo.list_all(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_absent_game_returns_false() {
        let repo = InMemoryGameRepository::new();
        let game = create_game("Orphan Game");
        assert!(!repo.update(&game).await.unwrap());
    }
}
