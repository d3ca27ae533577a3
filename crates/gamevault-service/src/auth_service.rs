//! Authentication service implementation.

use crate::dto::{LoginRequest, LoginResponse, MessageResponse, PrincipalSummary, RegisterRequest};
use async_trait::async_trait;
use gamevault_core::{Interface, Principal, Role, ValidateExt, VaultError, VaultResult};
use gamevault_repository::PrincipalRepository;
use gamevault_security::{Claims, PasswordHasherInterface, TokenProviderInterface};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Interface + Send + Sync {
    /// Registers a new account with its default role, atomically.
    async fn register(&self, request: RegisterRequest) -> VaultResult<MessageResponse>;

    /// Authenticates a principal and issues an access token.
    async fn login(&self, request: LoginRequest) -> VaultResult<LoginResponse>;

    /// Validates an access token and returns its claims.
    fn validate_token(&self, token: &str) -> VaultResult<Claims>;
}

/// Authentication service implementation.
#[derive(Component)]
#[shaku(interface = AuthService)]
pub struct AuthServiceImpl {
    #[shaku(inject)]
    principal_repository: Arc<dyn PrincipalRepository>,
    #[shaku(inject)]
    password_hasher: Arc<dyn PasswordHasherInterface>,
    #[shaku(inject)]
    token_provider: Arc<dyn TokenProviderInterface>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    #[must_use]
    pub fn new(
        principal_repository: Arc<dyn PrincipalRepository>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
        token_provider: Arc<dyn TokenProviderInterface>,
    ) -> Self {
        Self {
            principal_repository,
            password_hasher,
            token_provider,
        }
    }
}

/// Store write failures keep their shape when they are expected
/// (validation, conflict); anything else is reported opaquely.
fn surface_write_error(context: &str, e: VaultError) -> VaultError {
    match e {
        VaultError::Validation(_) | VaultError::Conflict(_) => e,
        other => {
            error!("{}: {}", context, other);
            VaultError::Internal(context.to_string())
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: RegisterRequest) -> VaultResult<MessageResponse> {
        debug!("Registering account: {}", request.username);

        request.validate_request()?;

        if self
            .principal_repository
            .exists_by_username(&request.username)
            .await?
        {
            return Err(VaultError::validation(format!(
                "Username '{}' is already taken",
                request.username
            )));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let principal = Principal::new(
            request.username,
            request.email,
            request.display_name,
            password_hash,
        );

        // Principal row and default role grant commit or roll back as one.
        let mut uow = self.principal_repository.begin().await?;

        if let Err(e) = uow.create(&principal).await {
            let _ = uow.rollback().await;
            return Err(surface_write_error("Failed to create account", e));
        }

        if let Err(e) = uow.add_role(principal.id, Role::User).await {
            warn!(
                "Role grant failed for {}, rolling back registration",
                principal.id
            );
            let _ = uow.rollback().await;
            return Err(surface_write_error("Failed to grant default role", e));
        }

        uow.commit().await?;

        info!("Account registered: {}", principal.id);
        Ok(MessageResponse::new("Account created successfully"))
    }

    async fn login(&self, request: LoginRequest) -> VaultResult<LoginResponse> {
        debug!("Login attempt for: {}", request.username);

        request.validate_request()?;

        // Unknown username and wrong password must be indistinguishable.
        let principal = self
            .principal_repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username - {}", request.username);
                VaultError::InvalidCredentials
            })?;

        if !self
            .password_hasher
            .verify(&request.password, &principal.password_hash)?
        {
            warn!("Login failed: wrong password - {}", principal.id);
            return Err(VaultError::InvalidCredentials);
        }

        let issued = self.token_provider.issue(&principal)?;

        info!("Principal logged in: {}", principal.id);
        Ok(LoginResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            principal: PrincipalSummary::from(&principal),
        })
    }

    fn validate_token(&self, token: &str) -> VaultResult<Claims> {
        self.token_provider.validate_token(token)
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}
