//! Win and draw detection
//!
//! Only the cell that was just played can complete a new line, so every
//! check here scans the four directions through that one cell.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Stones in a row needed to win (overlines count)
pub const WIN_LENGTH: usize = 5;

/// Terminal result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// `line` is the full run through the last move, ordered along the line
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameOutcome::Win { winner, .. } => Some(*winner),
            GameOutcome::Draw => None,
        }
    }
}

/// Contiguous run of `pos`'s color through `pos` along `(dr, dc)`.
///
/// The run is ordered from the negative end to the positive end.
pub fn run_through(board: &Board, pos: Pos, dr: i32, dc: i32) -> Vec<Pos> {
    let color = board.get(pos);
    let mut line = vec![pos];
    if color == Stone::Empty {
        return line;
    }

    // Extend in negative direction first
    let mut step = 1;
    while let Some(prev) = pos.offset(-dr, -dc, step) {
        if board.get(prev) != color {
            break;
        }
        line.insert(0, prev);
        step += 1;
    }

    // Extend in positive direction
    step = 1;
    while let Some(next) = pos.offset(dr, dc, step) {
        if board.get(next) != color {
            break;
        }
        line.push(next);
        step += 1;
    }

    line
}

/// Find the winning line through `pos`, if the stone there completed one.
///
/// Directions are tried in the fixed order horizontal, vertical, diagonal,
/// anti-diagonal; the first run of `WIN_LENGTH` or more is returned.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    if board.is_empty(pos) {
        return None;
    }
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| run_through(board, pos, dr, dc))
        .find(|line| line.len() >= WIN_LENGTH)
}

/// Fast five-in-a-row check at a specific position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    for (dr, dc) in DIRECTIONS {
        let mut count = 1;
        for sign in [1, -1] {
            let mut step = 1;
            while let Some(p) = pos.offset(dr * sign, dc * sign, step) {
                if board.get(p) != color {
                    break;
                }
                count += 1;
                step += 1;
            }
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Decide whether the move just played at `pos` ended the game.
///
/// Win is checked before draw, so filling the last cell with a five is a win.
pub fn check_outcome(board: &Board, pos: Pos) -> Option<GameOutcome> {
    if let Some(line) = find_five_line_at_pos(board, pos) {
        return Some(GameOutcome::Win {
            winner: board.get(pos),
            line,
        });
    }
    if board.is_full() {
        return Some(GameOutcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    fn place(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.push_move(Pos::new(r, c), stone);
        }
    }

    fn assert_valid_line(board: &Board, line: &[Pos]) {
        assert!(line.len() >= WIN_LENGTH);
        let color = board.get(line[0]);
        assert!(line.iter().all(|&p| board.get(p) == color));
        let dr = i32::from(line[1].row) - i32::from(line[0].row);
        let dc = i32::from(line[1].col) - i32::from(line[0].col);
        for pair in line.windows(2) {
            assert_eq!(i32::from(pair[1].row) - i32::from(pair[0].row), dr);
            assert_eq!(i32::from(pair[1].col) - i32::from(pair[0].col), dc);
        }
    }

    #[test]
    fn test_five_horizontal_from_every_cell() {
        let mut board = Board::new();
        let cells: Vec<(u8, u8)> = (5..10).map(|c| (5, c)).collect();
        place(&mut board, &cells, Stone::Black);

        for &(r, c) in &cells {
            let line = find_five_line_at_pos(&board, Pos::new(r, c)).expect("five");
            assert_eq!(line.len(), 5);
            assert_eq!(line.first(), Some(&Pos::new(5, 5)));
            assert_eq!(line.last(), Some(&Pos::new(5, 9)));
            assert_valid_line(&board, &line);
            assert!(has_five_at_pos(&board, Pos::new(r, c)));
        }
    }

    #[test]
    fn test_five_vertical_and_diagonals() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], Stone::White);
        let line = find_five_line_at_pos(&board, Pos::new(2, 0)).unwrap();
        assert_valid_line(&board, &line);

        let mut board = Board::new();
        place(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)], Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(7, 7)).unwrap();
        assert_eq!(line[0], Pos::new(3, 3));
        assert_valid_line(&board, &line);

        let mut board = Board::new();
        place(&mut board, &[(10, 0), (9, 1), (8, 2), (7, 3), (6, 4)], Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(8, 2)).unwrap();
        // Ordered from the (-1, +1) end of the anti-diagonal
        assert_eq!(line[0], Pos::new(6, 4));
        assert_eq!(line[4], Pos::new(10, 0));
        assert_valid_line(&board, &line);
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        assert!(find_five_line_at_pos(&board, Pos::new(7, 6)).is_none());
        assert!(!has_five_at_pos(&board, Pos::new(7, 6)));
        assert!(check_outcome(&board, Pos::new(7, 6)).is_none());
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, &[(2, 2), (2, 3), (2, 5), (2, 6)], Stone::Black);
        place(&mut board, &[(2, 4)], Stone::White);
        assert!(check_outcome(&board, Pos::new(2, 6)).is_none());
    }

    #[test]
    fn test_overline_counts_as_win() {
        let mut board = Board::new();
        let cells: Vec<(u8, u8)> = (0..6).map(|c| (14, c)).collect();
        place(&mut board, &cells, Stone::White);
        let outcome = check_outcome(&board, Pos::new(14, 2)).unwrap();
        match outcome {
            GameOutcome::Win { winner, line } => {
                assert_eq!(winner, Stone::White);
                assert_eq!(line.len(), 6);
            }
            GameOutcome::Draw => panic!("expected a win"),
        }
    }

    /// Fill pattern with no five anywhere: rows alternate in pairs of columns
    /// and every other row is shifted, which caps every line at length 2.
    fn drawn_stone(row: usize, col: usize) -> Stone {
        if ((col / 2) + row) % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    #[test]
    fn test_last_cell_without_five_is_draw() {
        let mut board = Board::new();
        let last = Pos::new(14, 14);
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if pos != last {
                board.push_move(pos, drawn_stone(pos.row as usize, pos.col as usize));
            }
        }
        board
            .apply_move(14, 14, drawn_stone(BOARD_SIZE - 1, BOARD_SIZE - 1))
            .unwrap();
        assert_eq!(check_outcome(&board, last), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_full_board_with_five_is_win() {
        let mut board = Board::new();
        let last = Pos::new(0, 4);
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if pos == last {
                continue;
            }
            let stone = if pos.row == 0 && pos.col < 4 {
                Stone::Black
            } else {
                drawn_stone(pos.row as usize, pos.col as usize)
            };
            board.push_move(pos, stone);
        }
        board.push_move(last, Stone::Black);
        assert!(board.is_full());
        let outcome = check_outcome(&board, last).unwrap();
        assert_eq!(outcome.winner(), Some(Stone::Black));
    }
}
