//! Exhaustive minimax search.
//!
//! The full game tree of a 3x3 board is small enough to search to the
//! end without pruning or a transposition table, which keeps the result
//! fully deterministic.

use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Mark};
use tracing::{instrument, trace, warn};

/// Value of a position from the AI's point of view: 1, 0 or -1.
pub type Score = i8;

/// The AI has won.
pub const WIN: Score = 1;
/// Neither side has won.
pub const DRAW: Score = 0;
/// The opponent has won.
pub const LOSS: Score = -1;

/// Scores `board` for `ai` with `to_move` about to play, assuming both
/// sides play perfectly from here.
///
/// Children are searched on copies of the board, so `board` is never
/// modified.
pub fn score(board: &Board, to_move: Mark, ai: Mark) -> Score {
    match evaluate(board) {
        Outcome::Won { mark, .. } if mark == ai => return WIN,
        Outcome::Won { .. } => return LOSS,
        Outcome::Draw => return DRAW,
        Outcome::InProgress => {}
    }

    let children = board.empty_cells().map(|index| {
        let mut child = *board;
        child.place(index, to_move);
        score(&child, to_move.opponent(), ai)
    });

    let best = if to_move == ai {
        children.max()
    } else {
        children.min()
    };

    // An in-progress board always has an empty square, so this only
    // triggers on a board that bypassed evaluation.
    best.unwrap_or_else(|| {
        warn!(board = ?board.to_cells(), "No children for non-terminal board, scoring as draw");
        DRAW
    })
}

/// Picks the highest-scoring empty square for `ai`.
///
/// Ties go to the lowest index. Returns `None` when the board is full.
#[instrument(skip(board), fields(board = %board.game_id()))]
pub fn best_move(board: &Board, ai: Mark) -> Option<usize> {
    let mut best: Option<(usize, Score)> = None;

    for index in board.empty_cells() {
        let mut child = *board;
        child.place(index, ai);
        let value = score(&child, ai.opponent(), ai);
        trace!(index, value, "Scored candidate");

        if best.is_none_or(|(_, top)| value > top) {
            best = Some((index, value));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(cells: &str) -> Board {
        let cells: Vec<String> = cells.chars().map(|c| c.to_string()).collect();
        Board::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let x_wins = board_of("XXXOO    ");
        assert_eq!(score(&x_wins, Mark::O, Mark::X), WIN);
        assert_eq!(score(&x_wins, Mark::O, Mark::O), LOSS);
        assert_eq!(score(&board_of("XOXOXXOXO"), Mark::X, Mark::X), DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        assert_eq!(score(&Board::new(), Mark::X, Mark::X), DRAW);
        assert_eq!(score(&Board::new(), Mark::X, Mark::O), DRAW);
    }

    #[test]
    fn test_score_leaves_board_untouched() {
        let board = board_of("X   O    ");
        let before = board;
        let _ = score(&board, Mark::X, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_forced_loss_is_detected() {
        // X holds two open lines through the top row and left column.
        // O to move cannot block both.
        let board = board_of("XX XO    ");
        assert_eq!(score(&board, Mark::O, Mark::O), LOSS);
    }

    #[test]
    fn test_best_move_takes_the_win() {
        assert_eq!(best_move(&board_of("XX OO    "), Mark::X), Some(2));
    }

    #[test]
    fn test_best_move_blocks() {
        assert_eq!(best_move(&board_of("X  XO    "), Mark::O), Some(6));
    }

    #[test]
    fn test_best_move_answers_corner_with_center() {
        assert_eq!(best_move(&board_of("X        "), Mark::O), Some(4));
    }

    #[test]
    fn test_best_move_full_board() {
        assert_eq!(best_move(&board_of("XOXOXXOXO"), Mark::X), None);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every opening draws, so the first empty square is chosen.
        assert_eq!(best_move(&Board::new(), Mark::X), Some(0));
    }
}
