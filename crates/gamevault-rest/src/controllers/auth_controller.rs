//! Authentication controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use gamevault_service::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new account.
async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<MessageResponse> {
    debug!("Registration request for: {}", request.username);

    let response = state.auth_service.register(request).await?;
    ok(response)
}

/// Login with username and password.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    debug!("Login request for: {}", request.username);

    let response = state.auth_service.login(request).await?;
    ok(response)
}
