//! Role checks on token claims.

use crate::Claims;
use gamevault_core::{Role, VaultError, VaultResult};

/// Extension trait for Claims to enforce role requirements.
pub trait ClaimsExt {
    /// Requires a specific role.
    fn require_role(&self, role: Role) -> VaultResult<()>;

    /// Requires the admin role.
    fn require_admin(&self) -> VaultResult<()>;
}

impl ClaimsExt for Claims {
    fn require_role(&self, role: Role) -> VaultResult<()> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(VaultError::Forbidden(format!("Required role: {}", role)))
        }
    }

    fn require_admin(&self) -> VaultResult<()> {
        self.require_role(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use gamevault_core::PrincipalId;

    fn claims_with_roles(roles: Vec<Role>) -> Claims {
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
    fn test_admin_satisfies_both_roles() {
        let claims = claims_with_roles(vec![Role::Admin]);
        assert!(claims.require_role(Role::User).is_ok());
        assert!(claims.require_admin().is_ok());
    }

    #[test]
    fn test_user_cannot_pass_admin_check() {
        let claims = claims_with_roles(vec![Role::User]);
        assert!(claims.require_role(Role::User).is_ok());
        assert!(matches!(
            claims.require_admin(),
            Err(VaultError::Forbidden(_))
        ));
    }
}
