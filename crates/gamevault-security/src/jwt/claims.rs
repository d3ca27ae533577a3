//! JWT claims structure.

use chrono::{DateTime, Utc};
use gamevault_core::{PrincipalId, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every GameVault access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal ID).
    pub sub: String,

    /// Principal ID as UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<Uuid>,

    /// Username.
    pub username: String,

    /// Principal's email.
    pub email: String,

    /// Roles granted to the principal.
    pub roles: Vec<Role>,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Not before timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates new access token claims.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        principal_id: PrincipalId,
        username: String,
        email: String,
        roles: Vec<Role>,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: principal_id.to_string(),
            principal_id: Some(principal_id.into_inner()),
            username,
            email,
            roles,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: issuer,
            aud: audience,
            jti: Uuid::now_v7().to_string(),
        }
    }

    /// Returns the principal ID.
    #[must_use]
    pub fn principal_id(&self) -> Option<PrincipalId> {
        self.principal_id.map(PrincipalId::from_uuid)
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks if any granted role satisfies the required role.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.roles.iter().any(|r| r.has_permission(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_claims(roles: Vec<Role>) -> Claims {
        Claims::new(
            PrincipalId::new(),
            "testuser".to_string(),
            "test@example.com".to_string(),
            roles,
            "issuer".to_string(),
            "audience".to_string(),
            Utc::now() + Duration::hours(1),
        )
    }

    #[test]
    fn test_fresh_claims_not_expired() {
        let claims = sample_claims(vec![Role::User]);
        assert!(!claims.is_expired());
        assert!(claims.principal_id().is_some());
    }

    #[test]
    fn test_role_check() {
        let claims = sample_claims(vec![Role::Admin]);
        assert!(claims.has_role(Role::User));
        assert!(claims.has_role(Role::Admin));

        let user_claims = sample_claims(vec![Role::User]);
        assert!(user_claims.has_role(Role::User));
        assert!(!user_claims.has_role(Role::Admin));
    }

    #[test]
    fn test_no_roles_denies_everything() {
        let claims = sample_claims(Vec::new());
        assert!(!claims.has_role(Role::User));
    }
}
