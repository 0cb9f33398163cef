//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};

/// The 8 winning triples, checked in this order.
#[rustfmt::skip]
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first completed triple in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<(Mark, [usize; 3])> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some((mark, [a, b, c]))
        }
        _ => None,
    })
}
