//! MySQL principal repository implementation.

use crate::{
    traits::{PrincipalRepository, PrincipalUnitOfWork},
    DatabasePoolInterface,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gamevault_core::{Principal, PrincipalId, Role, VaultError, VaultResult};
use shaku::Component;
use sqlx::{FromRow, MySql, Transaction};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL principal repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = PrincipalRepository)]
pub struct MySqlPrincipalRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlPrincipalRepository {
    /// Creates a new MySQL principal repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn load_roles(&self, id: &str) -> VaultResult<Vec<Role>> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT role FROM principal_roles WHERE principal_id = ?")
                .bind(id)
                .fetch_all(self.pool.inner())
                .await?;

        Ok(names.iter().filter_map(|n| Role::parse(n)).collect())
    }
}

/// Database row representation of a principal.
#[derive(Debug, FromRow)]
struct PrincipalRow {
    id: String, // UUID stored as CHAR(36)
    username: String,
    email: String,
    display_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl PrincipalRow {
    fn into_principal(self, roles: Vec<Role>) -> VaultResult<Principal> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| VaultError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Principal {
            id: PrincipalId::from_uuid(id),
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            password_hash: self.password_hash,
            roles,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl PrincipalRepository for MySqlPrincipalRepository {
    async fn find_by_id(&self, id: PrincipalId) -> VaultResult<Option<Principal>> {
        debug!("Finding principal by id: {}", id);

        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            SELECT id, username, email, display_name, password_hash, created_at
            FROM principals
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        match row {
            Some(row) => {
                let roles = self.load_roles(&row.id).await?;
                Ok(Some(row.into_principal(roles)?))
            }
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> VaultResult<Option<Principal>> {
        debug!("Finding principal by username: {}", username);

        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            SELECT id, username, email, display_name, password_hash, created_at
            FROM principals
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await?;

        match row {
            Some(row) => {
                let roles = self.load_roles(&row.id).await?;
                Ok(Some(row.into_principal(roles)?))
            }
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str) -> VaultResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM principals WHERE username = ? LIMIT 1")
                .bind(username)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn begin(&self) -> VaultResult<Box<dyn PrincipalUnitOfWork>> {
        let tx = self.pool.inner().begin().await?;
        Ok(Box::new(MySqlPrincipalUnitOfWork { tx }))
    }
}

/// Unit of work backed by a MySQL transaction.
///
/// Dropping without commit rolls the transaction back.
struct MySqlPrincipalUnitOfWork {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl PrincipalUnitOfWork for MySqlPrincipalUnitOfWork {
    async fn create(&mut self, principal: &Principal) -> VaultResult<()> {
        debug!("Inserting principal: {}", principal.username);

        sqlx::query(
            r#"
            INSERT INTO principals (id, username, email, display_name, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(principal.id.into_inner().to_string())
        .bind(&principal.username)
        .bind(&principal.email)
        .bind(&principal.display_name)
        .bind(&principal.password_hash)
        .bind(principal.created_at)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn add_role(&mut self, id: PrincipalId, role: Role) -> VaultResult<()> {
        debug!("Granting role {} to principal {}", role, id);

        sqlx::query("INSERT INTO principal_roles (principal_id, role) VALUES (?, ?)")
            .bind(id.into_inner().to_string())
            .bind(role.as_str())
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> VaultResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> VaultResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

impl std::fmt::Debug for MySqlPrincipalRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlPrincipalRepository")
            .finish_non_exhaustive()
    }
}
