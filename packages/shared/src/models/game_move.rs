use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Move {
    pub id: i64,
    pub game_id: i64,
    pub player_id: i64,
    pub row: i64,
    pub col: i64,
    pub symbol: Symbol,
    pub turn_number: i64,
    pub played_at: DateTime<Utc>,
}

/// A validated move that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMove {
    pub game_id: i64,
    pub player_id: i64,
    pub row: i64,
    pub col: i64,
    pub symbol: Symbol,
    pub turn_number: i64,
}
