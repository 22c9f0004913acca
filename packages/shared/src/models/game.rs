use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub owner_id: i64,
    pub opponent_id: Option<i64>,
    pub status: GameStatus,
    pub winner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn is_participant(&self, user_id: i64) -> bool {
        self.owner_id == user_id || self.opponent_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game(opponent_id: Option<i64>) -> Game {
        Game {
            id: 1,
            owner_id: 10,
            opponent_id,
            status: GameStatus::Waiting,
            winner_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_participant() {
        let game = sample_game(Some(20));

        assert!(game.is_participant(10));
        assert!(game.is_participant(20));
        assert!(!game.is_participant(30));
    }

    #[test]
    fn test_is_participant_without_opponent() {
        let game = sample_game(None);

        assert!(game.is_participant(10));
        assert!(!game.is_participant(20));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&GameStatus::Waiting).unwrap(),
            "\"waiting\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Completed).unwrap(),
            "\"completed\""
        );

        let deserialized: GameStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(deserialized, GameStatus::InProgress);
    }

    #[test]
    fn test_game_serialization() {
        let game = sample_game(Some(20));

        let serialized = serde_json::to_string(&game).unwrap();
        assert!(serialized.contains("\"owner_id\":10"));
        assert!(serialized.contains("\"opponent_id\":20"));
        assert!(serialized.contains("\"status\":\"waiting\""));
        assert!(serialized.contains("\"winner_id\":null"));

        let deserialized: Game = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.id, game.id);
        assert_eq!(deserialized.status, game.status);
    }
}
