//! AI engine: difficulty configuration, move choice and hints
//!
//! Difficulty only changes the search depth. The evaluator and candidate
//! generator are the same at every level.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, SearchConfig, Stone};
//!
//! let mut engine = AIEngine::new(SearchConfig::new(Difficulty::Shallow));
//! let mut board = Board::new();
//! board.apply_move(7, 7, Stone::Black).unwrap();
//!
//! let result = engine.choose_move(&mut board, Stone::White);
//! println!("AI plays at {:?} after {} nodes", result.best_move, result.nodes);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::search::{best_cell, Searcher};

/// Search strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Shallow,
    #[default]
    Medium,
    Deep,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Shallow, Difficulty::Medium, Difficulty::Deep];

    /// Search depth in plies
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Shallow => 1,
            Difficulty::Medium => 2,
            Difficulty::Deep => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Shallow => "shallow",
            Difficulty::Medium => "medium",
            Difficulty::Deep => "deep",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shallow" | "easy" | "1" => Ok(Difficulty::Shallow),
            "medium" | "2" => Ok(Difficulty::Medium),
            "deep" | "hard" | "3" => Ok(Difficulty::Deep),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Settings for one search call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
}

impl SearchConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.difficulty.depth()
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value for the searching side
    pub score: f64,
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI engine.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: SearchConfig,
}

impl AIEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Takes effect from the next search
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config = SearchConfig::new(difficulty);
    }

    /// Choose a move for `color` by alpha-beta search at the configured depth.
    ///
    /// The board is used as scratch space during the search and is returned
    /// unchanged.
    #[must_use]
    pub fn choose_move(&mut self, board: &mut Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let config = self.config;
        let mut searcher = Searcher::new(color);
        let result = searcher.search(board, config.depth());
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            difficulty = %config.difficulty,
            best = ?result.best_move,
            nodes = result.nodes,
            time_ms,
            "engine chose move"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// One-ply suggestion for `color`: the best cell by the cell heuristic.
    ///
    /// Weaker than [`AIEngine::choose_move`]; `None` only on a full board.
    #[must_use]
    pub fn hint(&self, board: &Board, color: Stone) -> Option<Pos> {
        best_cell(board, color).map(|m| m.pos)
    }
}
