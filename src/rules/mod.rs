//! Game rules for free-style Gomoku
//!
//! Five or more in a row wins; a full board without a five is a draw.
//! A move is legal when its cell is on the board and empty.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_outcome, find_five_line_at_pos, has_five_at_pos, run_through, GameOutcome, WIN_LENGTH,
};
