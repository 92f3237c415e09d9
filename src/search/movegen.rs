//! Candidate move generation
//!
//! Candidates are ranked by the cell heuristic and truncated before the
//! search sees them, so the branching factor never exceeds
//! [`MAX_CANDIDATES`].

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
use crate::eval::evaluate_position;

/// Maximum candidates handed to the search per node
pub const MAX_CANDIDATES: usize = 20;

/// Chebyshev radius around existing stones that candidates are drawn from
pub const NEIGHBOR_RADIUS: i32 = 2;

/// A candidate cell with its transient ordering score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: f64,
}

/// Unranked candidate cells in enumeration order.
///
/// With no moves played, the empty cells of the 3x3 block around the center.
/// Otherwise every empty cell within [`NEIGHBOR_RADIUS`] of a stone, visiting
/// stones in row-major order and emitting each cell once.
pub fn candidate_cells(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(64);

    if board.history().is_empty() {
        for row in CENTER - 1..=CENTER + 1 {
            for col in CENTER - 1..=CENTER + 1 {
                let pos = Pos::new(row, col);
                if board.is_empty(pos) {
                    moves.push(pos);
                }
            }
        }
        return moves;
    }

    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    for stone in board.occupied().iter_ones() {
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let Some(pos) = stone.offset(dr, dc, 1) else {
                    continue;
                };
                let cell = &mut seen[pos.row as usize][pos.col as usize];
                if *cell || !board.is_empty(pos) {
                    continue;
                }
                *cell = true;
                moves.push(pos);
            }
        }
    }
    moves
}

/// Ranked candidates for `perspective`, best first, at most [`MAX_CANDIDATES`].
///
/// Equal scores keep their enumeration order.
pub fn generate_moves(board: &Board, perspective: Stone) -> Vec<ScoredMove> {
    let mut moves: Vec<ScoredMove> = candidate_cells(board)
        .into_iter()
        .map(|pos| ScoredMove {
            pos,
            score: evaluate_position(board, pos, perspective),
        })
        .collect();

    // Stable: ties stay in enumeration order
    moves.sort_by(|a, b| b.score.total_cmp(&a.score));
    moves.truncate(MAX_CANDIDATES);
    moves
}

/// Single best cell by the cell heuristic over the whole board.
///
/// No search and no neighborhood restriction. Ties go to the first cell in
/// row-major order. `None` only when the board is full.
pub fn best_cell(board: &Board, perspective: Stone) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for pos in board.empty_cells() {
        let score = evaluate_position(board, pos, perspective);
        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredMove { pos, score });
        }
    }
    best
}
