//! Main application router.

use crate::{
    controllers::{auth_controller, games_controller, games_v2_controller, health_controller},
    middleware::{auth_middleware, correlation_middleware, logging_middleware, AuthMiddlewareState},
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use gamevault_config::ServerConfig;
use gamevault_security::TokenProviderInterface;
use gamevault_service::{AuthService, CachedGameService, GameService};
use shaku::{HasComponent, Module};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router from a Shaku module.
///
/// The module must provide the auth service, both catalog services and
/// the token provider.
pub fn create_router<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module
        + HasComponent<dyn AuthService>
        + HasComponent<dyn GameService>
        + HasComponent<dyn CachedGameService>
        + HasComponent<dyn TokenProviderInterface>,
{
    let cors = create_cors_layer(server_config);

    let token_provider: Arc<dyn TokenProviderInterface> = module.resolve();
    let auth_state = AuthMiddlewareState::new(token_provider);

    let state = AppState::from_module(module);

    // v1 serves the store directly; v2 goes through the cache-aside layer.
    let api_v1 = Router::new()
        .nest("/auth", auth_controller::router())
        .nest("/games", games_controller::router());

    let api_v2 = Router::new().nest("/games", games_v2_controller::router());

    let api_router = Router::new()
        .nest("/api/v1", api_v1)
        .nest("/api/v2", api_v2)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let router = Router::new()
        // Health endpoints (no auth required)
        .merge(health_controller::router())
        .merge(api_router)
        // Root endpoint
        .route("/", get(root))
        // Middleware layers; correlation runs innermost so it stamps
        // error bodies before compression.
        .layer(middleware::from_fn(correlation_middleware))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints under /api/v1 and /api/v2");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "GameVault API"
}
