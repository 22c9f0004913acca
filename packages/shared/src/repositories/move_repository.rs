use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::game::GameStatus;
use crate::models::game_move::{Move, NewMove};
use crate::repositories::errors::move_repository_errors::MoveRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct SqliteMoveRepository {
    pool: SqlitePool,
}

impl SqliteMoveRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait MoveRepository: Send + Sync {
    async fn list_moves_for_game(&self, game_id: i64) -> Result<Vec<Move>, MoveRepositoryError>;

    /// Inserts the move and applies the resulting game status in one
    /// transaction. Either both writes land or neither does.
    async fn record_move(
        &self,
        new_move: NewMove,
        status: GameStatus,
        winner_id: Option<i64>,
    ) -> Result<Move, MoveRepositoryError>;
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[async_trait]
impl MoveRepository for SqliteMoveRepository {
    async fn list_moves_for_game(&self, game_id: i64) -> Result<Vec<Move>, MoveRepositoryError> {
        sqlx::query_as::<_, Move>(
            "SELECT id, game_id, player_id, row, col, symbol, turn_number, played_at
             FROM moves
             WHERE game_id = ?
             ORDER BY turn_number ASC",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MoveRepositoryError::Database(e.to_string()))
    }

    async fn record_move(
        &self,
        new_move: NewMove,
        status: GameStatus,
        winner_id: Option<i64>,
    ) -> Result<Move, MoveRepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| MoveRepositoryError::Database(e.to_string()))?;

        let recorded = sqlx::query_as::<_, Move>(
            "INSERT INTO moves (game_id, player_id, row, col, symbol, turn_number, played_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id, game_id, player_id, row, col, symbol, turn_number, played_at",
        )
        .bind(new_move.game_id)
        .bind(new_move.player_id)
        .bind(new_move.row)
        .bind(new_move.col)
        .bind(new_move.symbol)
        .bind(new_move.turn_number)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                MoveRepositoryError::Conflict
            } else {
                MoveRepositoryError::Database(e.to_string())
            }
        })?;

        sqlx::query("UPDATE games SET status = ?, winner_id = ? WHERE id = ?")
            .bind(status)
            .bind(winner_id)
            .bind(new_move.game_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| MoveRepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| MoveRepositoryError::Database(e.to_string()))?;

        Ok(recorded)
    }
}
