#[derive(Debug, PartialEq, Eq)]
pub enum MoveServiceError {
    GameNotFound,
    GameAlreadyCompleted,
    NotAParticipant,
    CellOccupied,
    WrongSymbolForTurn,
    TurnOutOfSequence,
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for MoveServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveServiceError::GameNotFound => write!(f, "Game not found"),
            MoveServiceError::GameAlreadyCompleted => write!(f, "Game is already completed"),
            MoveServiceError::NotAParticipant => {
                write!(f, "Player is not a participant in this game")
            }
            MoveServiceError::CellOccupied => write!(f, "Cell is already occupied"),
            MoveServiceError::WrongSymbolForTurn => {
                write!(f, "Symbol does not match the turn order")
            }
            MoveServiceError::TurnOutOfSequence => write!(f, "Turn number is out of sequence"),
            MoveServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            MoveServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for MoveServiceError {}
