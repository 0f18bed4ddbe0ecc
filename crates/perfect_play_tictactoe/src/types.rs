//! Core domain types for tic-tac-toe.

use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (conventionally moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order (0-8). The search mutates a board
/// in place and restores every square it touches before returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a mark at the given position.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.set(pos, Square::Occupied(mark));
    }

    /// Clears the given position back to empty.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of marks placed so far.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// True when the mark counts differ by at most one, as alternating play requires.
    pub fn is_consistent(&self) -> bool {
        self.count(Mark::X).abs_diff(self.count(Mark::O)) <= 1
    }

    /// Compact nine-character notation, `.` for empty squares.
    ///
    /// The result parses back with [`str::parse`].
    pub fn to_notation(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as a 3x3 grid.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = cells
                .iter()
                .map(|s| match s {
                    Square::Empty => "   ".to_string(),
                    Square::Occupied(mark) => format!(" {} ", mark),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The string does not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is neither a mark nor an empty-cell marker.
    #[display("Unrecognized cell {:?} at index {}", found, index)]
    InvalidCell {
        /// Cell index of the offending character.
        index: usize,
        /// The character that was found.
        found: char,
    },
}

impl std::error::Error for BoardParseError {}

/// Parses nine cells in row-major order.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `_`, `-` and space are empty.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (index, (c, pos)) in cells.into_iter().zip(Position::ALL).enumerate() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                found => return Err(BoardParseError::InvalidCell { index, found }),
            };
            board.set(pos, square);
        }
        Ok(board)
    }
}

/// Assignment of marks to the AI and the human for one game.
///
/// The AI's mark maximizes the search score and the human's minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Players {
    ai: Mark,
    human: Mark,
}

impl Players {
    /// Creates an explicit assignment.
    pub fn new(ai: Mark, human: Mark) -> Self {
        Self { ai, human }
    }

    /// The AI plays `ai`, the human plays the other mark.
    pub fn ai_plays(ai: Mark) -> Self {
        Self::new(ai, ai.opponent())
    }

    /// The AI's mark.
    pub fn ai(&self) -> Mark {
        self.ai
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Mark of the side to move: the AI when maximizing, otherwise the human.
    pub fn to_move(&self, maximizing: bool) -> Mark {
        if maximizing { self.ai } else { self.human }
    }
}
