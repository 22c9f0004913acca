#[derive(Debug)]
pub enum MoveRepositoryError {
    /// A unique constraint rejected the insert: the cell or turn number was
    /// taken by a concurrent move.
    Conflict,
    Database(String),
}

impl std::fmt::Display for MoveRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRepositoryError::Conflict => {
                write!(f, "Move conflicts with an already recorded move")
            }
            MoveRepositoryError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for MoveRepositoryError {}
