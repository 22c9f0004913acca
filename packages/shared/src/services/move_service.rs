use std::sync::Arc;

use crate::models::game::{Game, GameStatus};
use crate::models::game_move::{Move, NewMove};
use crate::models::move_request::MoveRequest;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::move_repository_errors::MoveRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::move_repository::MoveRepository;
use crate::services::board::{self, BoardOutcome};
use crate::services::errors::move_service_errors::MoveServiceError;

pub struct MoveService {
    game_repository: Arc<dyn GameRepository + Send + Sync>,
    move_repository: Arc<dyn MoveRepository + Send + Sync>,
}

impl MoveService {
    pub fn new(
        game_repository: Arc<dyn GameRepository + Send + Sync>,
        move_repository: Arc<dyn MoveRepository + Send + Sync>,
    ) -> Self {
        MoveService {
            game_repository,
            move_repository,
        }
    }

    /// Validates and records one move for the given game.
    ///
    /// The checks run in a fixed order: game state, participation, cell,
    /// symbol, turn number. Every rejection is deterministic for the current
    /// game state, so callers must not retry with the same input.
    pub async fn play_move(
        &self,
        game_id: i64,
        player_id: i64,
        request: &MoveRequest,
    ) -> Result<Move, MoveServiceError> {
        if !(0..=2).contains(&request.row) || !(0..=2).contains(&request.col) {
            return Err(MoveServiceError::ValidationError(
                "Row and column must be between 0 and 2".to_string(),
            ));
        }

        let game = self.get_game(game_id).await?;
        if game.status == GameStatus::Completed {
            return Err(MoveServiceError::GameAlreadyCompleted);
        }
        if !game.is_participant(player_id) {
            return Err(MoveServiceError::NotAParticipant);
        }

        let moves = self.list_moves_unchecked(game_id).await?;
        let mut grid = board::grid(&moves);
        if grid[request.row as usize][request.col as usize].is_some() {
            return Err(MoveServiceError::CellOccupied);
        }

        let turn_number = moves.len() as i64;
        // The symbol is derived from turn parity on the server side; a
        // client-supplied symbol that disagrees is rejected, not trusted.
        let expected_symbol = board::expected_symbol(turn_number);
        if request.symbol != expected_symbol {
            return Err(MoveServiceError::WrongSymbolForTurn);
        }
        if request.turn_number != turn_number {
            return Err(MoveServiceError::TurnOutOfSequence);
        }

        grid[request.row as usize][request.col as usize] = Some(expected_symbol);
        let (status, winner_id) = match board::evaluate(&grid, moves.len() + 1) {
            // The winning line carries the symbol this move just played.
            BoardOutcome::Won(_) => (GameStatus::Completed, Some(player_id)),
            BoardOutcome::Draw => (GameStatus::Completed, None),
            BoardOutcome::Ongoing => {
                if game.opponent_id.is_some() {
                    (GameStatus::InProgress, None)
                } else {
                    (GameStatus::Waiting, None)
                }
            }
        };

        let new_move = NewMove {
            game_id,
            player_id,
            row: request.row,
            col: request.col,
            symbol: expected_symbol,
            turn_number,
        };

        self.move_repository
            .record_move(new_move, status, winner_id)
            .await
            .map_err(|e| match e {
                // A concurrent submission won the unique-constraint race for
                // this turn or cell; exactly one of the two moves lands.
                MoveRepositoryError::Conflict => MoveServiceError::TurnOutOfSequence,
                _ => MoveServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn list_moves(&self, game_id: i64) -> Result<Vec<Move>, MoveServiceError> {
        self.get_game(game_id).await?;
        self.list_moves_unchecked(game_id).await
    }

    async fn get_game(&self, game_id: i64) -> Result<Game, MoveServiceError> {
        self.game_repository
            .get_game(game_id)
            .await
            .map_err(|e| match e {
                GameRepositoryError::NotFound => MoveServiceError::GameNotFound,
                _ => MoveServiceError::RepositoryError(e.to_string()),
            })
    }

    async fn list_moves_unchecked(&self, game_id: i64) -> Result<Vec<Move>, MoveServiceError> {
        self.move_repository
            .list_moves_for_game(game_id)
            .await
            .map_err(|e| MoveServiceError::RepositoryError(e.to_string()))
    }
}
