//! Dependency injection module using Shaku.

use gamevault_config::{CacheConfig, DatabaseConfig, SecurityConfig};
use gamevault_core::VaultResult;
use gamevault_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlGameRepository,
    MySqlPrincipalRepository,
};
use gamevault_security::{
    PasswordHasher, PasswordHasherParameters, TokenProvider, TokenProviderInterface,
    TokenProviderParameters,
};
use gamevault_service::{
    AuthService, AuthServiceImpl, CachedGameService, CachedGameServiceImpl, GameService,
    GameServiceImpl, MemoryCacheService, MemoryCacheServiceParameters,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

// Single-process module wiring the full stack:
// - Database pool and MySQL repositories
// - Security components (password hashing, JWT tokens)
// - In-memory cache for the v2 catalog
// - Business services (auth, catalog, cached catalog)
module! {
    pub AppModule {
        components = [
            DatabasePool,
            PasswordHasher,
            TokenProvider,
            MySqlPrincipalRepository,
            MySqlGameRepository,
            MemoryCacheService,
            AuthServiceImpl,
            GameServiceImpl,
            CachedGameServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the application module with all dependencies.
pub async fn build_app_module(
    db_config: &DatabaseConfig,
    cache_config: &CacheConfig,
    security_config: &SecurityConfig,
) -> VaultResult<Arc<AppModule>> {
    // Connecting the pool is the only async step.
    let db_pool = DatabasePool::connect(db_config).await?;

    let password_hasher = PasswordHasher::with_cost(security_config.password_hash_cost);

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<PasswordHasher>(PasswordHasherParameters {
            argon2: password_hasher.argon2_arc(),
        })
        .with_component_parameters::<TokenProvider>(TokenProviderParameters {
            secret: security_config.jwt_secret.clone(),
            issuer: security_config.jwt_issuer.clone(),
            audience: security_config.jwt_audience.clone(),
            duration_minutes: security_config.token_duration_minutes,
        })
        .with_component_parameters::<MemoryCacheService>(MemoryCacheServiceParameters {
            entries: Arc::default(),
            enabled: cache_config.enabled,
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving common services from the module.
pub trait ServiceResolver {
    /// Resolves the auth service.
    fn auth_service(&self) -> Arc<dyn AuthService>;

    /// Resolves the uncached catalog service.
    fn game_service(&self) -> Arc<dyn GameService>;

    /// Resolves the cache-aside catalog service.
    fn cached_game_service(&self) -> Arc<dyn CachedGameService>;

    /// Resolves the token provider.
    fn token_provider(&self) -> Arc<dyn TokenProviderInterface>;
}

impl ServiceResolver for AppModule {
    fn auth_service(&self) -> Arc<dyn AuthService> {
        self.resolve()
    }

    fn game_service(&self) -> Arc<dyn GameService> {
        self.resolve()
    }

    fn cached_game_service(&self) -> Arc<dyn CachedGameService> {
        self.resolve()
    }

    fn token_provider(&self) -> Arc<dyn TokenProviderInterface> {
        self.resolve()
    }
}

/// Trait for resolving the database pool.
pub trait DatabaseResolver {
    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamevault_repository::{GameRepository, PrincipalRepository};
    use gamevault_security::PasswordHasherInterface;
    use gamevault_service::CacheInterface;

    #[test]
    fn test_module_provides_all_components() {
        // Compile-time verification of the module wiring.
        fn _assert_has_auth_service<T: HasComponent<dyn AuthService>>() {}
        fn _assert_has_game_service<T: HasComponent<dyn GameService>>() {}
        fn _assert_has_cached_game_service<T: HasComponent<dyn CachedGameService>>() {}
        fn _assert_has_principal_repository<T: HasComponent<dyn PrincipalRepository>>() {}
        fn _assert_has_game_repository<T: HasComponent<dyn GameRepository>>() {}
        fn _assert_has_password_hasher<T: HasComponent<dyn PasswordHasherInterface>>() {}
        fn _assert_has_token_provider<T: HasComponent<dyn TokenProviderInterface>>() {}
        fn _assert_has_database_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}

        _assert_has_auth_service::<AppModule>();
        _assert_has_game_service::<AppModule>();
        _assert_has_cached_game_service::<AppModule>();
        _assert_has_principal_repository::<AppModule>();
        _assert_has_game_repository::<AppModule>();
        _assert_has_password_hasher::<AppModule>();
        _assert_has_token_provider::<AppModule>();
        _assert_has_database_pool::<AppModule>();
        _assert_has_cache::<AppModule>();
    }

    #[test]
    fn test_resolver_traits_are_object_safe() {
        fn _use_service_resolver(_r: &dyn ServiceResolver) {}
        fn _use_database_resolver(_r: &dyn DatabaseResolver) {}
    }
}
