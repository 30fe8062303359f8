use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("cell index {index} is out of bounds (expected 0..=8)")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already marked")]
    CellOccupied { index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("board string has wrong length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("unknown difficulty '{value}' (expected easy, medium or hard)")]
    InvalidDifficulty { value: String },

    #[error("unknown mark '{value}' (expected X or O)")]
    InvalidMark { value: String },
}

impl EngineError {
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
