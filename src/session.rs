//! Interactive game session between a human and the engine.

use crate::config::GameConfig;
use derive_new::new;
use perfect_play_tictactoe::{Board, Mark, Outcome, Players, Position, choose_move_with, outcome};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Error that can occur while reading a human move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveInputError {
    /// The input is not a number.
    #[display("Please type a number from 1 to 9.")]
    NotANumber(String),

    /// The number is outside 1-9.
    #[display("Your move must be between 1 and 9.")]
    OutOfRange(usize),

    /// The square is already taken.
    #[display("That spot is already taken. Try again.")]
    Occupied(Position),
}

impl std::error::Error for MoveInputError {}

/// Error that ends a session early.
#[derive(Debug, derive_more::Display)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// Parses a human move typed as 1-9 and checks the square is free.
#[instrument(skip(board))]
pub fn parse_human_move(input: &str, board: &Board) -> Result<Position, MoveInputError> {
    let trimmed = input.trim();
    let number: usize = trimmed
        .parse()
        .map_err(|_| MoveInputError::NotANumber(trimmed.to_string()))?;
    let pos = Position::from_number(number).ok_or(MoveInputError::OutOfRange(number))?;

    if !board.is_empty(pos) {
        return Err(MoveInputError::Occupied(pos));
    }
    Ok(pos)
}

/// Board with each square showing the number a human types to play there.
pub fn guide() -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| format!(" {} ", pos.to_number()))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// One game of tic-tac-toe over a line-based terminal.
///
/// Generic over its input and output so the same loop drives stdin/stdout
/// and in-memory buffers. A new session starts from an empty board.
#[derive(Debug, new)]
pub struct GameSession<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    #[new(default)]
    board: Board,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays one game to completion.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe with Minimax + Alpha-Beta!")?;
        writeln!(self.output, "Board positions are numbered like this:")?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", guide())?;
        writeln!(self.output)?;

        let human = match *self.config.human_mark() {
            Some(mark) => mark,
            None => self.ask_mark()?,
        };
        let players = Players::ai_plays(human.opponent());
        writeln!(
            self.output,
            "You are {}. The AI is {}.",
            players.human(),
            players.ai()
        )?;

        let mut human_turn = match *self.config.human_first() {
            Some(first) => first,
            None => self.ask_yes_no("Do you want to go first? (y/n): ")?,
        };
        info!(
            human = %players.human(),
            ai = %players.ai(),
            human_first = human_turn,
            pruning = %self.config.pruning_mode(),
            "Game started"
        );

        let result = loop {
            self.show_board()?;

            if let Some(result) = outcome(&self.board) {
                break result;
            }

            if human_turn {
                writeln!(self.output, "Your turn.")?;
                let pos = self.ask_move()?;
                self.board.place(pos, players.human());
                debug!(position = %pos, "Human moved");
            } else {
                writeln!(self.output, "AI is thinking...")?;
                match choose_move_with(&mut self.board, players, self.config.pruning_mode()) {
                    Some(pos) => {
                        self.board.place(pos, players.ai());
                        debug!(position = %pos, "AI moved");
                    }
                    None => break Outcome::Draw,
                }
            }

            human_turn = !human_turn;
        };

        match result.winner() {
            Some(mark) if mark == players.human() => writeln!(self.output, "You win!")?,
            Some(_) => writeln!(self.output, "AI wins! (it's unbeatable!)")?,
            None => writeln!(self.output, "It's a draw!")?,
        }
        info!(%result, board = %self.board.to_notation(), "Game finished");

        Ok(result)
    }

    fn show_board(&mut self) -> Result<(), SessionError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.board)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed mid-game");
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_mark(&mut self) -> Result<Mark, SessionError> {
        loop {
            let answer = self.prompt("Do you want to be X or O? ")?;
            match Mark::from_str(&answer) {
                Ok(mark) => return Ok(mark),
                Err(_) => writeln!(self.output, "Please type X or O.")?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool, SessionError> {
        loop {
            let answer = self.prompt(question)?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Please type y or n.")?,
            }
        }
    }

    fn ask_move(&mut self) -> Result<Position, SessionError> {
        loop {
            let answer = self.prompt("Choose your move (1-9): ")?;
            match parse_human_move(&answer, &self.board) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    warn!(input = %answer, error = ?e, "Rejected move");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_move() {
        let board = Board::new();
        assert_eq!(parse_human_move("5\n", &board), Ok(Position::Center));
        assert_eq!(parse_human_move(" 1 ", &board), Ok(Position::TopLeft));
    }

    #[test]
    fn test_parse_rejects_text() {
        let board = Board::new();
        assert_eq!(
            parse_human_move("middle", &board),
            Err(MoveInputError::NotANumber("middle".to_string()))
        );
        assert!(matches!(
            parse_human_move("-3", &board),
            Err(MoveInputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            parse_human_move("0", &board),
            Err(MoveInputError::OutOfRange(0))
        );
        assert_eq!(
            parse_human_move("10", &board),
            Err(MoveInputError::OutOfRange(10))
        );
    }

    #[test]
    fn test_parse_rejects_occupied() {
        let board: Board = "....X....".parse().unwrap();
        let err = parse_human_move("5", &board).unwrap_err();
        assert_eq!(err, MoveInputError::Occupied(Position::Center));
        assert_eq!(err.to_string(), "That spot is already taken. Try again.");
    }

    #[test]
    fn test_guide_numbers_squares() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(guide(), expected);
    }
}
