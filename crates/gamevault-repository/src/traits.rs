//! Repository trait definitions.

use async_trait::async_trait;
use gamevault_core::{Game, GameId, Interface, Principal, PrincipalId, Role, VaultResult};

/// Principal repository trait.
#[async_trait]
pub trait PrincipalRepository: Interface + Send + Sync {
    /// Finds a principal by ID, roles included.
    async fn find_by_id(&self, id: PrincipalId) -> VaultResult<Option<Principal>>;

    /// Finds a principal by username, roles included.
    async fn find_by_username(&self, username: &str) -> VaultResult<Option<Principal>>;

    /// Checks if a username is already taken.
    async fn exists_by_username(&self, username: &str) -> VaultResult<bool>;

    /// Opens a unit of work spanning principal creation and role grants.
    async fn begin(&self) -> VaultResult<Box<dyn PrincipalUnitOfWork>>;
}

/// Transactional scope for account provisioning.
///
/// Dropping the scope without calling [`commit`](Self::commit) discards
/// every buffered write.
#[async_trait]
pub trait PrincipalUnitOfWork: Send {
    /// Inserts the principal record.
    async fn create(&mut self, principal: &Principal) -> VaultResult<()>;

    /// Grants a role to a principal inside the same transaction.
    async fn add_role(&mut self, id: PrincipalId, role: Role) -> VaultResult<()>;

    /// Commits all buffered writes atomically.
    async fn commit(self: Box<Self>) -> VaultResult<()>;

    /// Explicitly discards all buffered writes.
    async fn rollback(self: Box<Self>) -> VaultResult<()>;
}

/// Game repository trait.
#[async_trait]
pub trait GameRepository: Interface + Send + Sync {
    /// Inserts a new game.
    async fn add(&self, game: &Game) -> VaultResult<()>;

    /// Persists updated fields of an existing game. Returns `false` when
    /// no row matched the ID.
    async fn update(&self, game: &Game) -> VaultResult<bool>;

    /// Finds a game by ID. Soft-deleted rows are only returned when
    /// `include_deleted` is set.
    async fn find_by_id(&self, id: GameId, include_deleted: bool) -> VaultResult<Option<Game>>;

    /// Lists games ordered by name ascending. Soft-deleted rows are only
    /// included when `include_deleted` is set.
    async fn list_all(&self, include_deleted: bool) -> VaultResult<Vec<Game>>;

    /// Marks a game as soft-deleted. Returns `false` when no active row
    /// matched the ID.
    async fn soft_delete(&self, id: GameId) -> VaultResult<bool>;
}
