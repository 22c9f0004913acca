use std::sync::Arc;

use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::game_service_errors::GameServiceError;

pub struct GameService {
    game_repository: Arc<dyn GameRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl GameService {
    pub fn new(
        game_repository: Arc<dyn GameRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        GameService {
            game_repository,
            user_repository,
        }
    }

    pub async fn create_game(
        &self,
        owner_id: i64,
        opponent_id: Option<i64>,
    ) -> Result<Game, GameServiceError> {
        if let Some(opponent_id) = opponent_id {
            if opponent_id == owner_id {
                return Err(GameServiceError::ValidationError(
                    "Opponent cannot be the game owner".to_string(),
                ));
            }
            self.user_repository
                .get_user_by_id(opponent_id)
                .await
                .map_err(|e| match e {
                    UserRepositoryError::NotFound => GameServiceError::OpponentNotFound,
                    _ => GameServiceError::RepositoryError(e.to_string()),
                })?;
        }

        self.game_repository
            .create_game(owner_id, opponent_id)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))
    }

    pub async fn get_game(&self, game_id: i64) -> Result<Game, GameServiceError> {
        self.game_repository
            .get_game(game_id)
            .await
            .map_err(|e| match e {
                GameRepositoryError::NotFound => GameServiceError::GameNotFound,
                _ => GameServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn list_games_for_user(&self, user_id: i64) -> Result<Vec<Game>, GameServiceError> {
        self.game_repository
            .list_games_for_user(user_id)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::GameStatus;
    use crate::models::user::User;
    use crate::repositories::game_repository::MockGameRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use chrono::Utc;

    fn game(owner_id: i64, opponent_id: Option<i64>) -> Game {
        Game {
            id: 1,
            owner_id,
            opponent_id,
            status: GameStatus::Waiting,
            winner_id: None,
            created_at: Utc::now(),
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user-{}", id),
            hashed_password: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_game_without_opponent() {
        let mut mock_games = MockGameRepository::new();
        mock_games
            .expect_create_game()
            .withf(|owner_id, opponent_id| *owner_id == 10 && opponent_id.is_none())
            .returning(|owner_id, opponent_id| {
                let game = game(owner_id, opponent_id);
                Box::pin(async move { Ok(game) })
            });

        let service = GameService::new(Arc::new(mock_games), Arc::new(MockUserRepository::new()));
        let created = service.create_game(10, None).await.unwrap();

        assert_eq!(created.owner_id, 10);
        assert_eq!(created.status, GameStatus::Waiting);
    }

    #[tokio::test]
    async fn test_create_game_with_existing_opponent() {
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_get_user_by_id()
            .returning(|id| Box::pin(async move { Ok(user(id)) }));
        let mut mock_games = MockGameRepository::new();
        mock_games.expect_create_game().returning(|owner, opp| {
            let game = game(owner, opp);
            Box::pin(async move { Ok(game) })
        });

        let service = GameService::new(Arc::new(mock_games), Arc::new(mock_users));
        let created = service.create_game(10, Some(20)).await.unwrap();

        assert_eq!(created.opponent_id, Some(20));
    }

    #[tokio::test]
    async fn test_create_game_against_self_is_rejected() {
        let service = GameService::new(
            Arc::new(MockGameRepository::new()),
            Arc::new(MockUserRepository::new()),
        );

        let result = service.create_game(10, Some(10)).await;
        assert!(matches!(result, Err(GameServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_game_with_unknown_opponent_is_rejected() {
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_get_user_by_id()
            .returning(|_| Box::pin(async { Err(UserRepositoryError::NotFound) }));

        let service = GameService::new(Arc::new(MockGameRepository::new()), Arc::new(mock_users));
        let result = service.create_game(10, Some(99)).await;

        assert!(matches!(result, Err(GameServiceError::OpponentNotFound)));
    }

    #[tokio::test]
    async fn test_get_missing_game() {
        let mut mock_games = MockGameRepository::new();
        mock_games
            .expect_get_game()
            .returning(|_| Box::pin(async { Err(GameRepositoryError::NotFound) }));

        let service = GameService::new(Arc::new(mock_games), Arc::new(MockUserRepository::new()));
        let result = service.get_game(99).await;

        assert!(matches!(result, Err(GameServiceError::GameNotFound)));
    }
}
