//! Depth-bounded minimax with alpha-beta pruning
//!
//! The searcher explores candidates from [`generate_moves`] on the live
//! board. Each exploratory stone is placed through a `Placement` guard,
//! which removes it again when the guard goes out of scope, so the board
//! is restored on every exit path including pruning cutoffs.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.apply_move(7, 7, Stone::Black).unwrap();
//!
//! let mut searcher = Searcher::new(Stone::White);
//! let result = searcher.search(&mut board, 2);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_board;
use crate::rules::has_five_at_pos;

use super::movegen::generate_moves;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Static evaluations at leaves
    pub leaf_evals: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the root, from the maximizer's side
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// A stone placed for exploration; removed again on drop.
struct Placement<'a> {
    board: &'a mut Board,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        board.push_move(pos, stone);
        Self { board }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.pop_move();
    }
}

/// A node is terminal when the move that led to it made five or filled the board.
fn is_terminal(board: &Board) -> bool {
    board
        .last_move()
        .is_some_and(|m| has_five_at_pos(board, m.pos))
        || board.is_full()
}

/// Alpha-beta searcher for one side.
///
/// `maximizer` is the side the search plays for; its opponent minimizes.
/// Static values always come from [`evaluate_board`] for `maximizer`.
pub struct Searcher {
    maximizer: Stone,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(maximizer: Stone) -> Self {
        debug_assert!(maximizer != Stone::Empty);
        Self {
            maximizer,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Search `depth` plies with the maximizer to move.
    ///
    /// The board is mutated during the search and is returned unchanged.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stats = SearchStats::default();

        #[cfg(debug_assertions)]
        let snapshot = board.clone();

        let (score, best_move) =
            self.minimax(board, depth, self.maximizer, f64::NEG_INFINITY, f64::INFINITY);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*board, snapshot, "search leaked a stone");

        debug!(
            depth,
            nodes = self.nodes,
            cutoffs = self.stats.cutoffs,
            leaf_evals = self.stats.leaf_evals,
            score,
            best = ?best_move,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "alpha-beta search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        to_move: Stone,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<Pos>) {
        self.nodes += 1;

        if depth == 0 || is_terminal(board) {
            self.stats.leaf_evals += 1;
            return (evaluate_board(board, self.maximizer), None);
        }

        let moves = generate_moves(board, self.maximizer);
        if moves.is_empty() {
            return (0.0, None);
        }
        trace!(depth, ?to_move, candidates = moves.len(), "expanding node");

        let maximizing = to_move == self.maximizer;
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            let score = {
                let mut placed = Placement::new(board, mv.pos, to_move);
                self.minimax(&mut placed, depth - 1, to_move.opponent(), alpha, beta)
                    .0
            };

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv.pos);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv.pos);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}
