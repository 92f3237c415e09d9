//! Line-oriented text protocol for playing a game from a terminal or a
//! driving program.
//!
//! Each command is one line; each response starts with `=` on success or
//! `?` on failure and is followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `play <row> <col>` - Play the human stone; the engine replies in the same response
//! - `undo` - Take back the last exchange
//! - `hint` - Suggest a cell for the human
//! - `new` - Start a new game
//! - `level <shallow|medium|deep>` - Set the engine's search depth
//! - `show` - Print the board
//! - `help` - List all supported commands
//! - `quit` - Exit
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku::protocol::TextProtocol;
//! use gomoku::{Difficulty, GameSession};
//!
//! let mut protocol = TextProtocol::new(GameSession::new(Difficulty::Shallow), Duration::ZERO);
//! let mut out = Vec::new();
//! protocol.run("play 7 7\nquit\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("= "));
//! ```

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::board::{Pos, Stone};
use crate::engine::Difficulty;
use crate::rules::GameOutcome;
use crate::session::{GameSession, MoveStatus};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &["help", "hint", "level", "new", "play", "quit", "show", "undo"];

/// Command loop state.
pub struct TextProtocol {
    session: GameSession,
    /// Pause before the engine's reply
    think_delay: Duration,
}

impl TextProtocol {
    pub fn new(session: GameSession, think_delay: Duration) -> Self {
        Self {
            session,
            think_delay,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            writeln!(output, "{prefix} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "protocol command");
        match command {
            "help" => (true, KNOWN_COMMANDS.join(" ")),

            "quit" => (true, String::new()),

            "new" => {
                self.session.restart();
                (true, String::new())
            }

            "show" => (true, format!("\n{}", self.session.board())),

            "level" => {
                let Some(level) = args.first() else {
                    return (true, self.session.difficulty().to_string());
                };
                match level.parse::<Difficulty>() {
                    Ok(difficulty) => {
                        self.session.set_difficulty(difficulty);
                        (true, difficulty.to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "undo" => match self.session.undo_last_exchange() {
                Ok(()) => (true, String::new()),
                Err(e) => (false, e.to_string()),
            },

            "hint" => match self.session.hint() {
                Ok(Some(pos)) => (true, format_pos(pos)),
                Ok(None) => (false, "board is full".to_string()),
                Err(e) => (false, e.to_string()),
            },

            "play" => {
                let (row, col) = match parse_coords(args) {
                    Some(coords) => coords,
                    None => return (false, "expected: play <row> <col>".to_string()),
                };
                self.play(row, col)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Human move followed by the engine's reply.
    fn play(&mut self, row: usize, col: usize) -> (bool, String) {
        match self.session.apply_human_move(row, col) {
            Ok(MoveStatus::Terminal(outcome)) => return (true, describe_outcome(&outcome)),
            Ok(MoveStatus::Continue) => {}
            Err(e) => return (false, e.to_string()),
        }

        if !self.think_delay.is_zero() {
            thread::sleep(self.think_delay);
        }

        match self.session.request_automated_move() {
            Ok(reply) => match reply.status {
                MoveStatus::Continue => (true, format_pos(reply.pos)),
                MoveStatus::Terminal(outcome) => (
                    true,
                    format!("{} {}", format_pos(reply.pos), describe_outcome(&outcome)),
                ),
            },
            Err(e) => {
                warn!(error = %e, "engine failed to reply");
                (false, e.to_string())
            }
        }
    }
}

fn parse_coords(args: &[&str]) -> Option<(usize, usize)> {
    match args {
        [row, col, ..] => Some((row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

fn format_pos(pos: Pos) -> String {
    format!("{} {}", pos.row, pos.col)
}

fn describe_outcome(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Win { winner, line } => {
            let side = if *winner == Stone::Black { "black" } else { "white" };
            let cells: Vec<String> = line.iter().map(|&p| format_pos(p)).collect();
            format!("{side} wins: {}", cells.join(", "))
        }
        GameOutcome::Draw => "draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protocol() -> TextProtocol {
        TextProtocol::new(GameSession::new(Difficulty::Shallow), Duration::ZERO)
    }

    #[test]
    fn test_help_lists_commands() {
        let mut p = protocol();
        let (success, response) = p.execute("help", &[]);
        assert!(success);
        assert!(response.contains("play"));
        assert!(response.contains("undo"));
    }

    #[test]
    fn test_play_gets_reply() {
        let mut p = protocol();
        let (success, response) = p.execute("play", &["7", "7"]);
        assert!(success);
        let coords: Vec<usize> = response
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(coords.len(), 2);
        assert_eq!(p.session().move_count(), 2);
    }

    #[test]
    fn test_play_rejects_bad_input() {
        let mut p = protocol();
        let (success, _) = p.execute("play", &["7"]);
        assert!(!success);
        let (success, _) = p.execute("play", &["a", "b"]);
        assert!(!success);
        let (success, response) = p.execute("play", &["15", "0"]);
        assert!(!success);
        assert!(response.contains("out of bounds"));
        assert_eq!(p.session().move_count(), 0);
    }

    #[test]
    fn test_level_and_undo() {
        let mut p = protocol();
        let (success, response) = p.execute("level", &["deep"]);
        assert!(success);
        assert_eq!(response, "deep");
        let (success, _) = p.execute("level", &["extreme"]);
        assert!(!success);
        assert_eq!(p.session().difficulty(), Difficulty::Deep);

        let (success, _) = p.execute("undo", &[]);
        assert!(!success);
    }

    #[test]
    fn test_run_loop_stops_at_quit() {
        let mut p = protocol();
        let mut out = Vec::new();
        p.run("# comment\n\nhint\nquit\nplay 7 7\n".as_bytes(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("= 7 7"));
        assert_eq!(p.session().move_count(), 0);
    }
}
