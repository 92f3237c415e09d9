//! Heuristic evaluation of cells and whole boards
//!
//! Cell scores rate a single empty (or hypothetically re-played) cell for
//! move ordering and hints. The board score sums cell scores over every
//! stone and is used as the static value at search leaves.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::WIN_LENGTH;

use super::patterns::line_score;

/// Weight of the opponent's score at a cell (defensive value)
pub const OPPONENT_WEIGHT: f64 = 0.8;

/// Bonus per unit of Manhattan distance closer to center
pub const CENTER_WEIGHT: f64 = 0.1;

/// Maximum Manhattan distance from center on 15x15 board
const MAX_CENTER_DIST: i32 = 14;

/// Cells inspected on each side of the candidate
const SCAN_REACH: i32 = WIN_LENGTH as i32 - 1;

/// Raw counts from a directional scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionScan {
    /// Run length including the candidate cell
    pub consecutive: u32,
    /// Sides ending on an empty cell (0, 1 or 2)
    pub open_ends: u32,
}

/// Scan both ways along `(dr, dc)` from `pos`, treating `pos` as `player`'s.
///
/// Each side stops at the first cell that is not `player`'s. An empty stop
/// cell counts as an open end; an opponent stone or the edge does not.
pub fn scan_direction(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> DirectionScan {
    let mut consecutive = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        for step in 1..=SCAN_REACH {
            let Some(p) = pos.offset(dr * sign, dc * sign, step) else {
                break;
            };
            match board.get(p) {
                s if s == player => consecutive += 1,
                Stone::Empty => {
                    open_ends += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    DirectionScan {
        consecutive,
        open_ends,
    }
}

/// Directional run score for `player` at `pos`.
#[must_use]
pub fn evaluate_direction(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> f64 {
    let scan = scan_direction(board, pos, dr, dc, player);
    line_score(scan.consecutive, scan.open_ends)
}

/// Score a cell from `perspective`'s point of view.
///
/// Attack value for `perspective` plus 0.8x the value the same cell has for
/// the opponent, summed over the four directions, plus a small pull toward
/// the center.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, perspective: Stone) -> f64 {
    let opponent = perspective.opponent();
    let mut score = 0.0;

    for &(dr, dc) in &DIRECTIONS {
        let attack = evaluate_direction(board, pos, dr, dc, perspective);
        let defense = evaluate_direction(board, pos, dr, dc, opponent);
        score += attack + defense * OPPONENT_WEIGHT;
    }

    score + f64::from(MAX_CENTER_DIST - pos.center_distance()) * CENTER_WEIGHT
}

/// Static board value, positive when `maximizer` is ahead.
///
/// Every stone contributes its cell score (from `maximizer`'s perspective),
/// added for `maximizer`'s stones and subtracted for the opponent's.
#[must_use]
pub fn evaluate_board(board: &Board, maximizer: Stone) -> f64 {
    let mut score = 0.0;
    for pos in board.occupied().iter_ones() {
        let value = evaluate_position(board, pos, maximizer);
        if board.get(pos) == maximizer {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}
