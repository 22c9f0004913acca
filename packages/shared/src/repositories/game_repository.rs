use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::game::{Game, GameStatus};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct SqliteGameRepository {
    pool: SqlitePool,
}

impl SqliteGameRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait GameRepository: Send + Sync {
    async fn create_game(
        &self,
        owner_id: i64,
        opponent_id: Option<i64>,
    ) -> Result<Game, GameRepositoryError>;
    async fn get_game(&self, game_id: i64) -> Result<Game, GameRepositoryError>;
    async fn list_games_for_user(&self, user_id: i64) -> Result<Vec<Game>, GameRepositoryError>;
}

#[async_trait]
impl GameRepository for SqliteGameRepository {
    async fn create_game(
        &self,
        owner_id: i64,
        opponent_id: Option<i64>,
    ) -> Result<Game, GameRepositoryError> {
        sqlx::query_as::<_, Game>(
            "INSERT INTO games (owner_id, opponent_id, status, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, owner_id, opponent_id, status, winner_id, created_at",
        )
        .bind(owner_id)
        .bind(opponent_id)
        .bind(GameStatus::Waiting)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GameRepositoryError::Database(e.to_string()))
    }

    async fn get_game(&self, game_id: i64) -> Result<Game, GameRepositoryError> {
        sqlx::query_as::<_, Game>(
            "SELECT id, owner_id, opponent_id, status, winner_id, created_at
             FROM games WHERE id = ?",
        )
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GameRepositoryError::Database(e.to_string()))?
        .ok_or(GameRepositoryError::NotFound)
    }

    async fn list_games_for_user(&self, user_id: i64) -> Result<Vec<Game>, GameRepositoryError> {
        sqlx::query_as::<_, Game>(
            "SELECT id, owner_id, opponent_id, status, winner_id, created_at
             FROM games
             WHERE owner_id = ? OR opponent_id = ?
             ORDER BY created_at ASC",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GameRepositoryError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::repositories::user_repository::{SqliteUserRepository, UserRepository};

    async fn setup() -> (SqliteGameRepository, i64, i64) {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        db::init_schema(&pool).await.unwrap();

        let users = SqliteUserRepository::new(pool.clone());
        let owner = users.create_user("owner", "hash-a").await.unwrap();
        let opponent = users.create_user("opponent", "hash-b").await.unwrap();

        (SqliteGameRepository::new(pool), owner.id, opponent.id)
    }

    #[tokio::test]
    async fn test_create_game_starts_waiting() {
        let (repo, owner_id, opponent_id) = setup().await;

        let game = repo.create_game(owner_id, Some(opponent_id)).await.unwrap();
        assert_eq!(game.owner_id, owner_id);
        assert_eq!(game.opponent_id, Some(opponent_id));
        assert_eq!(game.status, GameStatus::Waiting);
        assert_eq!(game.winner_id, None);

        let fetched = repo.get_game(game.id).await.unwrap();
        assert_eq!(fetched.id, game.id);
        assert_eq!(fetched.status, GameStatus::Waiting);
    }

    #[tokio::test]
    async fn test_get_missing_game_is_not_found() {
        let (repo, _, _) = setup().await;

        let result = repo.get_game(999).await;
        assert!(matches!(result, Err(GameRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_games_covers_both_roles() {
        let (repo, owner_id, opponent_id) = setup().await;

        let as_owner = repo.create_game(owner_id, None).await.unwrap();
        let as_opponent = repo.create_game(opponent_id, Some(owner_id)).await.unwrap();
        repo.create_game(opponent_id, None).await.unwrap();

        let games = repo.list_games_for_user(owner_id).await.unwrap();
        let ids: Vec<i64> = games.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![as_owner.id, as_opponent.id]);
    }
}
