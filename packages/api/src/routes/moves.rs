use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::game_move::Move;
use shared::models::move_request::MoveRequest;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/moves/{game_id}", post(play_move))
        .route("/moves/by_game/{game_id}", get(list_moves))
}

async fn play_move(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(game_id): Path<i64>,
    Json(move_data): Json<MoveRequest>,
) -> Result<(StatusCode, Json<Move>), ApiError> {
    let recorded = state
        .move_service
        .play_move(game_id, authenticated_user.user_id, &move_data)
        .await
        .map_err(|e| {
            error!(
                "Rejected move by user {} in game {}: {}",
                authenticated_user.user_id, game_id, e
            );
            ApiError::from(e)
        })?;
    debug!(
        "Move {} recorded in game {} (turn {})",
        recorded.id, game_id, recorded.turn_number
    );
    Ok((StatusCode::CREATED, Json(recorded)))
}

async fn list_moves(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<i64>,
) -> Result<Json<Vec<Move>>, ApiError> {
    state
        .move_service
        .list_moves(game_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list moves for game {}: {}", game_id, e);
            ApiError::from(e)
        })
}
