//! Errors reported by the rules engine.

/// Everything that can go wrong when building a game or playing a move.
///
/// A rejected move never changes the position: callers may report the error
/// and ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("point ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("illegal move: point ({row}, {col}) is not empty")]
    CellOccupied { row: usize, col: usize },

    #[error("illegal move: suicide at ({row}, {col})")]
    SuicideMove { row: usize, col: usize },
}

impl GameError {
    /// True for the two rule violations a player can make in a running game.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied { .. } | GameError::SuicideMove { .. }
        )
    }
}
