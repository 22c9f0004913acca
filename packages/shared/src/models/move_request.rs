use serde::{Deserialize, Serialize};

use crate::models::game_move::Symbol;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveRequest {
    pub row: i64,
    pub col: i64,
    pub symbol: Symbol,
    pub turn_number: i64,
}
