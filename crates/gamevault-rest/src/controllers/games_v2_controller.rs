//! Game catalog controller (API v2, cache-aside).
//!
//! Reads are served through the cache layer and, unlike v1, include
//! soft-deleted games. Writes invalidate the affected cache entries.

use crate::{
    controllers::games_controller::parse_game_id,
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
use gamevault_core::Role;
use gamevault_security::ClaimsExt;
use gamevault_service::{GameDto, GameRequest};
use tracing::debug;

/// Creates the v2 games router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route(
            "/:id",
            get(get_game).put(update_game).delete(delete_game),
        )
}

/// List all games, including soft-deleted ones.
async fn list_games(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<Vec<GameDto>> {
    debug!("List games request (v2)");

    let games = state.cached_game_service.list_all().await?;
    ok(games)
}

/// Get a game by ID, including soft-deleted ones.
async fn get_game(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<GameDto> {
    debug!("Get game request (v2): {}", id);

    let game_id = parse_game_id(&id)?;
    let game = state.cached_game_service.get_by_id(game_id).await?;
    ok(game)
}

/// Create a new game (admin only).
async fn create_game(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<GameRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GameDto>>), AppError> {
    debug!("Create game request (v2): {}", request.name);

    user.require_role(Role::Admin)?;

    let game = state.cached_game_service.create(request).await?;
    Ok(created(game))
}

/// Update an existing game (admin only).
async fn update_game(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<GameRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update game request (v2): {}", id);

    user.require_role(Role::Admin)?;

    let game_id = parse_game_id(&id)?;
    state.cached_game_service.update(game_id, request).await?;

    Ok(no_content())
}

/// Soft-delete a game (admin only).
async fn delete_game(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete game request (v2): {}", id);

    user.require_role(Role::Admin)?;

    let game_id = parse_game_id(&id)?;
    state.cached_game_service.delete(game_id).await?;

    Ok(no_content())
}
