//! Move selection for the easy and hard difficulties.

use crate::counter::MoveCounter;
use crate::search::best_move;
use crate::types::{Board, Difficulty, GameId, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Uniformly random empty square, or `None` if the board is full.
pub fn select_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_cells().collect();
    empty.choose(rng).copied()
}

/// Chooses the engine's move for a given difficulty.
///
/// Hard mode is always the minimax move. Easy mode alternates: the
/// engine's odd-numbered moves within a game are random, even-numbered
/// ones are the minimax move. Move numbers come from the injected
/// [`MoveCounter`].
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    counter: MoveCounter,
}

impl MoveSelector {
    /// Creates a selector backed by `counter`.
    #[instrument(skip(counter))]
    pub fn new(counter: MoveCounter) -> Self {
        Self { counter }
    }

    /// The move counter this selector records into.
    pub fn counter(&self) -> &MoveCounter {
        &self.counter
    }

    /// Best square for `ai`; ties go to the lowest index.
    pub fn select_hard(&self, board: &Board, ai: Mark) -> Option<usize> {
        best_move(board, ai)
    }

    /// Easy-mode move for `game`.
    ///
    /// Always records the move in the counter, even when the board is
    /// full and no move is returned.
    #[instrument(skip(self, board, rng), fields(game = %game))]
    pub fn select_easy<R: Rng + ?Sized>(
        &self,
        board: &Board,
        game: &GameId,
        ai: Mark,
        rng: &mut R,
    ) -> Option<usize> {
        let move_number = self.counter.increment(game);

        if board.empty_cells().next().is_none() {
            debug!(move_number, "Board is full, no move available");
            return None;
        }

        let choice = if move_number % 2 == 1 {
            select_random(board, rng)
        } else {
            self.select_hard(board, ai)
        };
        debug!(move_number, ?choice, "Selected easy move");
        choice
    }

    /// Dispatches on `difficulty`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        game: &GameId,
        ai: Mark,
        rng: &mut R,
    ) -> Option<usize> {
        match difficulty {
            Difficulty::Hard => self.select_hard(board, ai),
            Difficulty::Easy => self.select_easy(board, game, ai, rng),
        }
    }
}
