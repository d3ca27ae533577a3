//! Game catalog controller (API v1, uncached).

use crate::{
    extractors::AuthenticatedUser,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use gamevault_core::{GameId, Role, VaultError};
use gamevault_security::ClaimsExt;
use gamevault_service::{GameDto, GameRequest};
use tracing::debug;

/// Creates the v1 games router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route(
            "/:id",
            get(get_game).put(update_game).delete(delete_game),
        )
}

/// List active games.
async fn list_games(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<Vec<GameDto>> {
    debug!("List games request");

    let games = state.game_service.list().await?;
    ok(games)
}

/// Get an active game by ID.
async fn get_game(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<GameDto> {
    debug!("Get game request: {}", id);

    let game_id = parse_game_id(&id)?;
    let game = state.game_service.get(game_id).await?;
    ok(game)
}

/// Create a new game (admin only).
async fn create_game(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<GameRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GameDto>>), AppError> {
    debug!("Create game request: {}", request.name);

    user.require_role(Role::Admin)?;

    let game = state.game_service.create(request).await?;
    Ok(created(game))
}

/// Update an existing game (admin only).
async fn update_game(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<GameRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update game request: {}", id);

    user.require_role(Role::Admin)?;

    let game_id = parse_game_id(&id)?;
    state.game_service.update(game_id, request).await?;

    Ok(no_content())
}

/// Soft-delete a game (admin only).
async fn delete_game(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete game request: {}", id);

    user.require_role(Role::Admin)?;

    let game_id = parse_game_id(&id)?;
    state.game_service.delete(game_id).await?;

    Ok(no_content())
}

/// Helper to parse a game ID from a path parameter.
pub(crate) fn parse_game_id(id: &str) -> Result<GameId, AppError> {
    GameId::parse(id).map_err(|_| AppError(VaultError::Validation(format!("Invalid game ID: {}", id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_id_accepts_uuid() {
        let id = GameId::new();
        assert_eq!(parse_game_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_game_id_rejects_garbage() {
        let err = parse_game_id("not-a-uuid").unwrap_err();
        assert!(matches!(err.0, VaultError::Validation(_)));
    }
}
