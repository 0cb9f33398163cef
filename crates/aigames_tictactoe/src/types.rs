//! Core domain types for tic-tac-toe.

use crate::error::{ParseError, ParseErrorKind};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;

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
    /// Mark X.
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

    /// Wire representation of this mark.
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// On the wire a square is `"X"`, `"O"` or `" "` (empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Wire representation of an empty square.
    pub const EMPTY: &'static str = " ";

    /// Wire representation of this square.
    pub fn as_str(self) -> &'static str {
        match self {
            Square::Empty => Self::EMPTY,
            Square::Occupied(mark) => mark.as_str(),
        }
    }

    /// Parses a wire value, reporting `index` on failure.
    #[track_caller]
    pub fn parse_at(index: usize, value: &str) -> Result<Self, ParseError> {
        match value {
            Self::EMPTY => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Mark::X)),
            "O" => Ok(Square::Occupied(Mark::O)),
            other => Err(ParseError::new(ParseErrorKind::UnknownSymbol {
                index,
                symbol: other.to_string(),
            })),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Decoded from wire cells with [`Board::from_cells`], which reports the
/// index of the first bad cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Decodes a board from its wire cells.
    ///
    /// Fails if there are not exactly nine cells or a cell holds an
    /// unknown symbol.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, ParseError> {
        if cells.len() != 9 {
            return Err(ParseError::new(ParseErrorKind::WrongLength(cells.len())));
        }
        let mut squares = [Square::Empty; 9];
        for (index, cell) in cells.iter().enumerate() {
            squares[index] = Square::parse_at(index, cell.as_ref())?;
        }
        Ok(Self { squares })
    }

    /// Encodes the board as wire cells.
    pub fn to_cells(&self) -> Vec<String> {
        self.squares.iter().map(|s| s.as_str().to_string()).collect()
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places a mark at the given index.
    ///
    /// Returns `false` if the index is out of bounds.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.squares.get_mut(index) {
            Some(square) => {
                *square = Square::Occupied(mark);
                true
            }
            None => false,
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(|&i| self.squares[i] == Square::Empty)
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Identity of the game this board belongs to.
    ///
    /// Derived from the cell contents, so two games that reach the same
    /// board share an identity.
    pub fn game_id(&self) -> GameId {
        GameId(self.squares.iter().map(|s| s.as_str()).collect())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Move-quality level requested by the caller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random on odd-numbered AI moves, optimal on even-numbered ones.
    Easy,
    /// Always optimal.
    #[default]
    Hard,
}

/// Per-game key for move counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub struct GameId(String);

impl GameId {
    /// Returns the underlying key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
