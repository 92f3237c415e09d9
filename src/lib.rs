//! Gomoku engine: free-style five-in-a-row on a 15x15 board
//!
//! A human (Black) plays against a minimax opponent (White):
//! - Exact win detection (five or more in a row) and draw on a full board
//! - Candidate moves restricted to the neighborhood of existing stones,
//!   pre-ranked by a directional pattern heuristic and capped at 20
//! - Depth-bounded minimax with alpha-beta pruning, depth set by difficulty
//! - Undo of the last human/engine exchange and one-ply hints
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and move history
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Cell and board heuristics
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: Difficulty configuration, move choice and hints
//! - [`session`]: Turn order, turn lock, undo and restart for one game
//! - [`protocol`]: Line-oriented text command loop used by the binary
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Difficulty, GameSession, MoveStatus};
//!
//! let mut session = GameSession::new(Difficulty::Shallow);
//! if session.apply_human_move(7, 7).unwrap() == MoveStatus::Continue {
//!     let reply = session.request_automated_move().unwrap();
//!     println!("AI plays at {}", reply.pos);
//! }
//! session.undo_last_exchange().unwrap();
//! assert_eq!(session.move_count(), 0);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, Difficulty, MoveResult, SearchConfig};
pub use error::{GameError, GameResult, IllegalReason};
pub use rules::GameOutcome;
pub use session::{AutomatedMove, GameSession, MoveStatus, AUTOMATED, HUMAN};
