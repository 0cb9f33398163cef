//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the search and the request layer share one
//! definition of "finished".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::types::{Board, Mark};

/// Terminal or non-terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Nobody has won and at least one square is empty.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Indices of the completed triple.
        line: [usize; 3],
    },
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Wire label: `"X"`, `"O"`, `"draw"`, or `None` while in progress.
    pub fn winner_label(&self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won { mark, .. } => Some(mark.as_str().to_string()),
            Outcome::Draw => Some("draw".to_string()),
        }
    }

    /// Winning triple, or an empty slice when no line is complete.
    pub fn line(&self) -> &[usize] {
        match self {
            Outcome::Won { line, .. } => line.as_slice(),
            _ => &[],
        }
    }
}

/// Evaluates the board.
///
/// A completed line takes precedence over a full board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        Outcome::Won { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
