use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGameRequest {
    pub opponent_id: Option<i64>,
}
