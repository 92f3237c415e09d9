//! End-to-end games through the public session API.

use gomoku::rules::{check_outcome, find_five_line_at_pos};
use gomoku::{
    Board, Difficulty, GameError, GameOutcome, GameSession, MoveStatus, Pos, Stone, AUTOMATED,
    BOARD_SIZE, HUMAN,
};

/// Border cells with both coordinates even: never adjacent to each other,
/// so a human playing only these cannot build a run.
fn passive_cells() -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for i in (0..BOARD_SIZE).step_by(2) {
        cells.push((0, i));
        cells.push((BOARD_SIZE - 1, i));
        if i != 0 && i != BOARD_SIZE - 1 {
            cells.push((i, 0));
            cells.push((i, BOARD_SIZE - 1));
        }
    }
    cells
}

fn assert_stone_count_matches_history(session: &GameSession) {
    let board = session.board();
    assert_eq!(board.stone_count() as usize, board.history().len());
}

#[test]
fn engine_beats_passive_human() {
    let mut session = GameSession::new(Difficulty::Shallow);
    let mut outcome = None;

    for (row, col) in passive_cells() {
        if !session.board().is_empty(Pos::new(row as u8, col as u8)) {
            continue;
        }
        match session.apply_human_move(row, col).unwrap() {
            MoveStatus::Terminal(o) => {
                outcome = Some(o);
                break;
            }
            MoveStatus::Continue => {}
        }
        assert!(session.is_awaiting_reply());
        let reply = session.request_automated_move().unwrap();
        assert_stone_count_matches_history(&session);
        if let MoveStatus::Terminal(o) = reply.status {
            outcome = Some(o);
            break;
        }
    }

    let outcome = outcome.expect("engine should finish the game");
    assert_eq!(outcome.winner(), Some(AUTOMATED));
    assert!(session.is_over());

    let line = session.winning_line().expect("winning line recorded").to_vec();
    assert!(line.len() >= 5);
    assert!(line.iter().all(|&p| session.board().get(p) == AUTOMATED));
    assert!(line.contains(&session.last_move().unwrap()));

    // Terminal session refuses further play
    assert_eq!(session.apply_human_move(7, 0), Err(GameError::GameOver));
    assert_eq!(session.request_automated_move().unwrap_err(), GameError::GameOver);
    assert_eq!(session.hint(), Err(GameError::GameOver));

    // A finished game cannot be taken back, only restarted
    let before = session.move_count();
    assert_eq!(session.undo_last_exchange(), Err(GameError::GameOver));
    assert_eq!(session.move_count(), before);
    assert!(session.is_over());
    assert!(session.winning_line().is_some());

    session.restart();
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.current_turn(), HUMAN);
}

#[test]
fn undo_to_empty_and_replay() {
    let mut session = GameSession::new(Difficulty::Medium);
    session.apply_human_move(7, 7).unwrap();
    let first_reply = session.request_automated_move().unwrap().pos;
    session.apply_human_move(6, 6).unwrap();
    session.request_automated_move().unwrap();

    session.undo_last_exchange().unwrap();
    session.undo_last_exchange().unwrap();
    assert_eq!(session.move_count(), 0);
    assert!(session.board().is_board_empty());
    assert_eq!(session.undo_last_exchange(), Err(GameError::EmptyHistory));

    // Same position, same depth: the search is deterministic
    session.apply_human_move(7, 7).unwrap();
    assert_eq!(session.request_automated_move().unwrap().pos, first_reply);
}

#[test]
fn difficulty_change_applies_to_next_reply() {
    let mut session = GameSession::new(Difficulty::Shallow);
    session.apply_human_move(7, 7).unwrap();
    let reply = session.request_automated_move().unwrap();
    assert_eq!(reply.search.depth, 1);

    session.set_difficulty(Difficulty::Deep);
    let (row, col) = if reply.pos == Pos::new(7, 9) { (7, 5) } else { (7, 9) };
    session.apply_human_move(row, col).unwrap();
    let reply = session.request_automated_move().unwrap();
    assert_eq!(reply.search.depth, 3);
}

#[test]
fn scenario_five_in_row_from_any_stone() {
    let mut board = Board::new();
    for c in 5..10 {
        board.apply_move(5, c, Stone::Black).unwrap();
    }
    for c in 5..10u8 {
        let line = find_five_line_at_pos(&board, Pos::new(5, c)).unwrap();
        assert_eq!(line.len(), 5);
    }
    match check_outcome(&board, Pos::new(5, 9)) {
        Some(GameOutcome::Win { winner, line }) => {
            assert_eq!(winner, Stone::Black);
            assert_eq!(line.len(), 5);
        }
        other => panic!("expected win, got {other:?}"),
    }
}

#[test]
fn hint_is_legal_and_leaves_state() {
    let mut session = GameSession::new(Difficulty::Shallow);
    session.apply_human_move(7, 7).unwrap();
    session.request_automated_move().unwrap();
    let before = session.board().clone();

    let hint = session.hint().unwrap().unwrap();
    assert!(session.board().is_empty(hint));
    assert_eq!(session.board(), &before);
    assert!(session.apply_human_move(hint.row as usize, hint.col as usize).is_ok());
}
