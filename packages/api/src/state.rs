use std::sync::Arc;

use sqlx::SqlitePool;

use shared::repositories::game_repository::SqliteGameRepository;
use shared::repositories::move_repository::SqliteMoveRepository;
use shared::repositories::user_repository::SqliteUserRepository;
use shared::services::auth_service::AuthService;
use shared::services::game_service::GameService;
use shared::services::move_service::MoveService;
use shared::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub game_service: Arc<GameService>,
    pub move_service: Arc<MoveService>,
}

impl AppState {
    /// Wires repositories and services over the given pool, reading the JWT
    /// secret from the environment.
    pub fn new(pool: SqlitePool) -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");
        Self::with_jwt_secret(pool, jwt_secret)
    }

    pub fn with_jwt_secret(pool: SqlitePool, jwt_secret: String) -> Self {
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let game_repository = Arc::new(SqliteGameRepository::new(pool.clone()));
        let move_repository = Arc::new(SqliteMoveRepository::new(pool));

        let user_service = Arc::new(UserService::new(user_repository.clone()));
        let auth_service = Arc::new(AuthService::with_jwt_secret(
            user_service.clone(),
            jwt_secret,
        ));
        let game_service = Arc::new(GameService::new(
            game_repository.clone(),
            user_repository,
        ));
        let move_service = Arc::new(MoveService::new(game_repository, move_repository));

        AppState {
            auth_service,
            user_service,
            game_service,
            move_service,
        }
    }
}
