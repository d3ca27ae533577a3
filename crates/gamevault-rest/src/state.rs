//! Application state for Axum handlers.

use gamevault_service::{AuthService, CachedGameService, GameService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub game_service: Arc<dyn GameService>,
    pub cached_game_service: Arc<dyn CachedGameService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        game_service: Arc<dyn GameService>,
        cached_game_service: Arc<dyn CachedGameService>,
    ) -> Self {
        Self {
            auth_service,
            game_service,
            cached_game_service,
        }
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn AuthService>
            + HasComponent<dyn GameService>
            + HasComponent<dyn CachedGameService>,
    {
        Self {
            auth_service: module.resolve(),
            game_service: module.resolve(),
            cached_game_service: module.resolve(),
        }
    }
}
