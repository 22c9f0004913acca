use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use shared::services::errors::{
    auth_service_errors::AuthServiceError, game_service_errors::GameServiceError,
    move_service_errors::MoveServiceError, user_service_errors::UserServiceError,
};

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    UserService(UserServiceError),
    AuthService(AuthServiceError),
    GameService(GameServiceError),
    MoveService(MoveServiceError),
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<MoveServiceError> for ApiError {
    fn from(error: MoveServiceError) -> Self {
        ApiError::MoveService(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::UserService(err) => write!(f, "{}", err),
            ApiError::AuthService(err) => write!(f, "{}", err),
            ApiError::GameService(err) => write!(f, "{}", err),
            ApiError::MoveService(err) => write!(f, "{}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UserService(UserServiceError::UserAlreadyExists) => StatusCode::CONFLICT,
            ApiError::UserService(UserServiceError::UserNotFound) => StatusCode::NOT_FOUND,
            ApiError::UserService(UserServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::UserService(
                UserServiceError::RepositoryError(_) | UserServiceError::PasswordHashError(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::AuthService(AuthServiceError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::AuthService(AuthServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::AuthService(
                AuthServiceError::InvalidToken | AuthServiceError::ExpiredToken,
            ) => StatusCode::UNAUTHORIZED,
            ApiError::AuthService(
                AuthServiceError::UserServiceError(_) | AuthServiceError::JwtError(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::GameService(GameServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::GameService(
                GameServiceError::OpponentNotFound | GameServiceError::ValidationError(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::MoveService(MoveServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::MoveService(MoveServiceError::NotAParticipant) => StatusCode::FORBIDDEN,
            ApiError::MoveService(
                MoveServiceError::GameAlreadyCompleted
                | MoveServiceError::CellOccupied
                | MoveServiceError::WrongSymbolForTurn
                | MoveServiceError::TurnOutOfSequence,
            ) => StatusCode::CONFLICT,
            ApiError::MoveService(MoveServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::MoveService(MoveServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
