//! Error types for the game engine

use std::fmt;

use thiserror::Error;

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::OutOfBounds => f.write_str("out of bounds"),
            IllegalReason::Occupied => f.write_str("already occupied"),
        }
    }
}

/// Recoverable errors surfaced to the caller.
///
/// None of these leave a partial state change behind: the board, history
/// and session flags are exactly as they were before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalReason,
    },

    #[error("no moves to undo")]
    EmptyHistory,

    #[error("game already over")]
    GameOver,

    #[error("waiting for the automated reply")]
    TurnLocked,

    #[error("it is not the automated side's turn")]
    NotAutomatedTurn,

    #[error("unknown difficulty '{0}' (expected shallow, medium or deep)")]
    UnknownDifficulty(String),

    #[error("no candidate moves available")]
    NoCandidates,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
