use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::game::Game;
use shared::models::game_request::CreateGameRequest;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(create_game))
        .route("/games", get(list_games))
        .route("/games/{game_id}", get(get_game))
}

async fn create_game(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(game_data): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state
        .game_service
        .create_game(authenticated_user.user_id, game_data.opponent_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to create game for user {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;
    debug!("Game {} created by user {}", game.id, game.owner_id);
    Ok((StatusCode::CREATED, Json(game)))
}

async fn list_games(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Vec<Game>>, ApiError> {
    state
        .game_service
        .list_games_for_user(authenticated_user.user_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                "Failed to list games for user {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })
}

async fn get_game(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<i64>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .get_game(game_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to retrieve game {}: {}", game_id, e);
            ApiError::from(e)
        })
}
