//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{DateTime, Duration, Utc};
use gamevault_config::SecurityConfig;
use gamevault_core::{Interface, Principal, VaultError, VaultResult};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use shaku::Component;
use tracing::{debug, warn};

/// A freshly issued access token together with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Signed JWT string.
    pub token: String,
    /// Absolute expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Interface for token issuance and validation.
pub trait TokenProviderInterface: Interface + Send + Sync {
    /// Issues an access token for a principal.
    fn issue(&self, principal: &Principal) -> VaultResult<IssuedToken>;

    /// Validates a token and returns its claims.
    fn validate_token(&self, token: &str) -> VaultResult<Claims>;
}

/// JWT token provider service.
///
/// Holds plain configuration values and derives signing keys on demand so
/// the component can be wired through the DI container.
#[derive(Component, Clone)]
#[shaku(interface = TokenProviderInterface)]
pub struct TokenProvider {
    secret: String,
    issuer: String,
    audience: String,
    /// Token lifetime in minutes. Fractional values are honored down to
    /// the millisecond.
    duration_minutes: f64,
}

impl TokenProvider {
    /// Creates a new token provider from the security configuration.
    #[must_use]
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            duration_minutes: config.token_duration_minutes,
        }
    }

    fn token_duration(&self) -> Duration {
        Duration::milliseconds((self.duration_minutes * 60_000.0) as i64)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation
    }
}

impl TokenProviderInterface for TokenProvider {
    fn issue(&self, principal: &Principal) -> VaultResult<IssuedToken> {
        let expires_at = Utc::now() + self.token_duration();

        let claims = Claims::new(
            principal.id,
            principal.username.clone(),
            principal.email.clone(),
            principal.roles.clone(),
            self.issuer.clone(),
            self.audience.clone(),
            expires_at,
        );

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        let token = encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| VaultError::Internal(format!("Failed to generate token: {}", e)))?;

        debug!("Issued access token for principal {}", principal.id);
        Ok(IssuedToken { token, expires_at })
    }

    fn validate_token(&self, token: &str) -> VaultResult<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let token_data =
            decode::<Claims>(token, &decoding_key, &self.validation()).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => VaultError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        VaultError::InvalidToken("Invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        VaultError::InvalidToken("Invalid token issuer".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        VaultError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => VaultError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
