//! Principal (user account) entity.

use super::role::Role;
use crate::{Entity, PrincipalId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Principal entity representing an authenticated identity.
///
/// Created once during registration; roles are attached in the same
/// transaction as the creation. Principals are never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier.
    pub id: PrincipalId,

    /// Unique login name.
    pub username: String,

    /// Email address.
    pub email: String,

    /// Display name.
    pub display_name: String,

    /// Credential hash (opaque; never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Assigned roles.
    pub roles: Vec<Role>,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new principal with no roles assigned yet.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: PrincipalId::new(),
            username: username.into(),
            email: email.into(),
            display_name: display_name.into(),
            password_hash: password_hash.into(),
            roles: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Attaches a role, ignoring duplicates.
    pub fn grant_role(&mut self, role: Role) {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
    }

    /// Checks if any assigned role satisfies the required role.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.roles.iter().any(|r| r.has_permission(required))
    }

    /// Checks if the principal is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

impl Entity<PrincipalId> for Principal {
    fn id(&self) -> &PrincipalId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_principal() -> Principal {
        Principal::new("johndoe", "john@example.com", "John Doe", "hashed")
    }

    #[test]
    fn test_principal_creation() {
        let principal = create_principal();
        assert_eq!(principal.username, "johndoe");
        assert_eq!(principal.display_name, "John Doe");
        assert!(principal.roles.is_empty());
        assert!(!principal.is_admin());
    }

    #[test]
    fn test_grant_role_deduplicates() {
        let mut principal = create_principal();
        principal.grant_role(Role::User);
        principal.grant_role(Role::User);
        assert_eq!(principal.roles.len(), 1);
    }

    #[test]
    fn test_admin_satisfies_user_role() {
        let mut principal = create_principal();
        principal.grant_role(Role::Admin);
        assert!(principal.has_role(Role::User));
        assert!(principal.is_admin());
    }

    #[test]
    fn test_user_role_does_not_satisfy_admin() {
        let mut principal = create_principal();
        principal.grant_role(Role::User);
        assert!(!principal.is_admin());
    }

    #[test]
    fn test_serialize_does_not_expose_password_hash() {
        let principal = create_principal();
        let json = serde_json::to_string(&principal).unwrap();
        assert!(!json.contains("hashed"));
    }

    #[test]
    fn test_principal_ids_are_unique() {
        let a = create_principal();
        let b = create_principal();
        assert_ne!(a.id, b.id);
    }
}
