//! Game session: one human against the engine
//!
//! The human plays Black and always moves first; the engine plays White.
//! After a human move that does not end the game the session is locked
//! until [`GameSession::request_automated_move`] applies the reply. Any
//! delay before requesting the reply belongs to the caller.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, Difficulty, MoveResult, SearchConfig};
use crate::error::{GameError, GameResult};
use crate::rules::{check_outcome, GameOutcome};

/// Side played by the human
pub const HUMAN: Stone = Stone::Black;
/// Side played by the engine
pub const AUTOMATED: Stone = Stone::White;

/// State of the game after a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    Continue,
    Terminal(GameOutcome),
}

/// The engine's reply and how the game stands afterwards
#[derive(Debug, Clone)]
pub struct AutomatedMove {
    pub pos: Pos,
    pub status: MoveStatus,
    pub search: MoveResult,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_turn: Stone,
    outcome: Option<GameOutcome>,
    engine: AIEngine,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current_turn: HUMAN,
            outcome: None,
            engine: AIEngine::new(SearchConfig::new(difficulty)),
        }
    }

    /// Replace this session with a fresh game at the same difficulty
    pub fn restart(&mut self) {
        *self = GameSession::new(self.difficulty());
        info!(difficulty = %self.difficulty(), "game restarted");
    }

    /// Applies to later automated moves only
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
        debug!(%difficulty, "difficulty changed");
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.config().difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side entitled to the next stone
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Human input is refused until the engine replies
    pub fn is_awaiting_reply(&self) -> bool {
        self.outcome.is_none() && self.current_turn == AUTOMATED
    }

    /// Cells of the winning run, ordered along the line
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Some(GameOutcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move().map(|m| m.pos)
    }

    pub fn move_count(&self) -> usize {
        self.board.history().len()
    }

    /// Play the human's stone at `(row, col)`.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> GameResult<MoveStatus> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != HUMAN {
            return Err(GameError::TurnLocked);
        }

        let pos = self.board.apply_move(row, col, HUMAN)?;
        Ok(self.finish_move(pos, HUMAN))
    }

    /// Search for and play the engine's reply. Blocks until the search ends.
    pub fn request_automated_move(&mut self) -> GameResult<AutomatedMove> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != AUTOMATED {
            return Err(GameError::NotAutomatedTurn);
        }

        let search = self.engine.choose_move(&mut self.board, AUTOMATED);
        let pos = search.best_move.ok_or(GameError::NoCandidates)?;
        self.board.push_move(pos, AUTOMATED);
        let status = self.finish_move(pos, AUTOMATED);

        Ok(AutomatedMove {
            pos,
            status,
            search,
        })
    }

    fn finish_move(&mut self, pos: Pos, color: Stone) -> MoveStatus {
        if let Some(outcome) = check_outcome(&self.board, pos) {
            info!(?outcome, moves = self.move_count(), "game over");
            self.outcome = Some(outcome.clone());
            return MoveStatus::Terminal(outcome);
        }
        self.current_turn = color.opponent();
        MoveStatus::Continue
    }

    /// Take back the last exchange.
    ///
    /// If the engine moved last, its move and the human move before it are
    /// removed. If the engine has not replied yet, only the human move is
    /// removed. The human is to move afterwards. A finished game stays
    /// finished until [`GameSession::restart`].
    pub fn undo_last_exchange(&mut self) -> GameResult<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let last = self.board.last_move().ok_or(GameError::EmptyHistory)?;
        self.board.undo_last()?;
        if last.stone == AUTOMATED
            && self.board.last_move().is_some_and(|m| m.stone == HUMAN)
        {
            self.board.undo_last()?;
        }

        self.current_turn = HUMAN;
        debug!(moves = self.move_count(), "undid last exchange");
        Ok(())
    }

    /// Best cell for the human by the one-ply heuristic.
    ///
    /// `Ok(None)` only when the board is full.
    pub fn hint(&self) -> GameResult<Option<Pos>> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(self.engine.hint(&self.board, HUMAN))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
