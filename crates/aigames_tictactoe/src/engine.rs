//! Request-level entry point: choose a move, apply it, report the result.

use crate::counter::MoveCounter;
use crate::error::ParseError;
use crate::rules::{Outcome, evaluate};
use crate::selector::MoveSelector;
use crate::types::{Board, Difficulty, GameId, Mark};
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A request for the engine's next move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Nine cells in row-major order: `"X"`, `"O"` or `" "`.
    pub board: Vec<String>,
    /// Requested move quality.
    pub difficulty: Difficulty,
    /// The mark the engine plays.
    pub ai_symbol: Mark,
}

/// The engine's move and the resulting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// Chosen cell index, or -1 if no move was available.
    #[serde(rename = "move")]
    pub chosen: i32,
    /// Board after the move.
    pub board: Vec<String>,
    /// `"X"`, `"O"`, `"draw"`, or absent while the game continues.
    pub winner: Option<String>,
    /// Indices of the winning line, empty if there is none.
    pub winning_line: Vec<usize>,
}

/// Typed result of one engine turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Chosen cell, `None` if the board was already full.
    pub chosen: Option<usize>,
    /// Board after the move.
    pub board: Board,
    /// Outcome of the board after the move.
    pub outcome: Outcome,
}

impl From<Turn> for MoveResponse {
    fn from(turn: Turn) -> Self {
        Self {
            chosen: turn.chosen.map_or(-1, |index| index as i32),
            board: turn.board.to_cells(),
            winner: turn.outcome.winner_label(),
            winning_line: turn.outcome.line().to_vec(),
        }
    }
}

/// Move engine shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    selector: MoveSelector,
}

impl Engine {
    /// Creates an engine recording easy-mode moves into `counter`.
    #[instrument(skip(counter))]
    pub fn new(counter: MoveCounter) -> Self {
        Self {
            selector: MoveSelector::new(counter),
        }
    }

    /// The selector this engine delegates to.
    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }

    /// Decodes `request`, plays one move and encodes the result.
    ///
    /// Fails only when the board cannot be decoded.
    pub fn ai_move(&self, request: &MoveRequest) -> Result<MoveResponse, ParseError> {
        self.ai_move_with_rng(request, &mut rand::thread_rng())
    }

    /// [`Engine::ai_move`] with a caller-supplied source of randomness.
    #[instrument(
        skip(self, request, rng),
        fields(difficulty = %request.difficulty, ai = %request.ai_symbol)
    )]
    pub fn ai_move_with_rng<R: Rng + ?Sized>(
        &self,
        request: &MoveRequest,
        rng: &mut R,
    ) -> Result<MoveResponse, ParseError> {
        let board = Board::from_cells(&request.board)?;
        let turn = self.play(&board, request.difficulty, request.ai_symbol, rng);
        Ok(turn.into())
    }

    /// Plays one move for `ai` on a copy of `board`.
    ///
    /// The game is identified by the board itself, as it is for
    /// [`Engine::ai_move`].
    pub fn play<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        ai: Mark,
        rng: &mut R,
    ) -> Turn {
        self.play_in_game(board, &board.game_id(), difficulty, ai, rng)
    }

    /// Plays one move for `ai` in an explicitly identified game.
    ///
    /// The game's counter entry is dropped when the move ends the game.
    #[instrument(skip(self, board, rng), fields(game = %game))]
    pub fn play_in_game<R: Rng + ?Sized>(
        &self,
        board: &Board,
        game: &GameId,
        difficulty: Difficulty,
        ai: Mark,
        rng: &mut R,
    ) -> Turn {
        let mut next = *board;

        let chosen = self.selector.select(board, difficulty, game, ai, rng);
        if let Some(index) = chosen {
            next.place(index, ai);
        }

        let outcome = evaluate(&next);
        if outcome.is_terminal() {
            self.selector.counter().remove(game);
        }

        info!(?chosen, ?outcome, "Engine moved");
        Turn {
            chosen,
            board: next,
            outcome,
        }
    }

    /// Clears every move count. Returns how many entries were dropped.
    pub fn reset(&self) -> usize {
        self.selector.counter().clear()
    }
}
