//! Board structure with move history

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{GameError, GameResult, IllegalReason};

/// Game board: one bitboard per color plus the ordered move history.
///
/// Invariant: `stone_count() == history().len()`. Every mutation goes
/// through [`Board::apply_move`]/[`Board::undo_last`] or the search-only
/// [`Board::push_move`]/[`Board::pop_move`] pair, all of which keep the
/// history in step with the bitboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    history: Vec<MoveRecord>,
}

/// A recorded move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            history: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Validate and play a move, appending it to the history.
    ///
    /// Fails with `IllegalMove` when the cell is off the board or taken.
    /// Turn order is not checked here.
    pub fn apply_move(&mut self, row: usize, col: usize, stone: Stone) -> GameResult<Pos> {
        debug_assert!(stone != Stone::Empty);
        let pos = Pos::try_new(row, col).ok_or(GameError::IllegalMove {
            row,
            col,
            reason: IllegalReason::OutOfBounds,
        })?;
        if !self.is_empty(pos) {
            return Err(GameError::IllegalMove {
                row,
                col,
                reason: IllegalReason::Occupied,
            });
        }
        self.push_move(pos, stone);
        Ok(pos)
    }

    /// Remove the most recent move and return it.
    pub fn undo_last(&mut self) -> GameResult<MoveRecord> {
        self.pop_move().ok_or(GameError::EmptyHistory)
    }

    /// Place a stone on a cell the caller knows to be empty and in bounds.
    #[inline]
    pub fn push_move(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "push_move onto occupied {pos}");
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return,
        }
        self.history.push(MoveRecord { pos, stone });
    }

    /// Pop the most recent move, clearing its cell.
    #[inline]
    pub fn pop_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.black.clear(record.pos);
        self.white.clear(record.pos);
        Some(record)
    }

    /// Moves in play order
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Every cell occupied (draw precondition)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row:>3}")?;
            for col in 0..BOARD_SIZE {
                let stone = self.get(Pos::new(row as u8, col as u8));
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
