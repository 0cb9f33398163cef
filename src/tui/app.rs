//! Application state and logic.

use super::input::move_cursor;
use aigames_tictactoe::{Board, Difficulty, Engine, GameId, Mark, Outcome, Position, evaluate};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Who sits on the other side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One person against the engine.
    VsEngine {
        /// Requested move quality.
        difficulty: Difficulty,
        /// The mark the engine plays.
        ai: Mark,
    },
    /// Two people sharing the keyboard, X first.
    TwoPlayer,
}

impl Mode {
    /// The engine's mark, if the engine plays.
    pub fn engine_mark(self) -> Option<Mark> {
        match self {
            Mode::VsEngine { ai, .. } => Some(ai),
            Mode::TwoPlayer => None,
        }
    }
}

/// Main application state.
pub struct App<R> {
    engine: Engine,
    rng: R,
    mode: Mode,
    board: Board,
    outcome: Outcome,
    cursor: Position,
    to_move: Mark,
    game: GameId,
    games_played: u32,
    status_message: String,
}

impl<R> App<R> {
    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The mark that places next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Squares still open for play.
    pub fn open_squares(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    // Digit keys for the open squares, e.g. "1 2 5".
    fn open_hint(&self) -> String {
        self.open_squares()
            .iter()
            .map(|pos| (pos.to_index() + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn prompt(&mut self) {
        self.status_message = match self.mode {
            Mode::VsEngine { .. } => {
                format!("Your move ({}). Open: {}", self.to_move, self.open_hint())
            }
            Mode::TwoPlayer => {
                format!("Player {} to move. Open: {}", self.to_move, self.open_hint())
            }
        };
    }
}

impl<R: Rng> App<R> {
    /// Creates a new application and starts the first game.
    ///
    /// If the engine plays X it moves immediately.
    #[instrument(skip(engine, rng))]
    pub fn new(engine: Engine, rng: R, mode: Mode) -> Self {
        let mut app = Self {
            engine,
            rng,
            mode,
            board: Board::new(),
            outcome: Outcome::InProgress,
            cursor: Position::Center,
            to_move: Mark::X,
            game: GameId::from("tui-1".to_string()),
            games_played: 1,
            status_message: String::new(),
        };
        app.begin();
        app
    }

    /// Handles a key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_label_or_number(&c.to_string()) {
                    self.cursor = pos;
                    self.play_at(pos);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        true
    }

    /// Places the mark to move at `pos`, then lets the engine reply if it
    /// plays.
    #[instrument(skip(self), fields(game = %self.game))]
    pub fn play_at(&mut self, pos: Position) {
        if self.outcome.is_terminal() {
            self.status_message = "Game over. Press 'r' to restart or 'q' to quit.".to_string();
            return;
        }
        if !self.board.is_empty(pos.to_index()) {
            self.status_message =
                format!("{} is already taken. Open: {}", pos.label(), self.open_hint());
            return;
        }

        self.board.place(pos.to_index(), self.to_move);
        self.outcome = evaluate(&self.board);
        debug!(position = %pos, mark = %self.to_move, outcome = ?self.outcome, "Square taken");
        self.to_move = self.to_move.opponent();

        if self.outcome.is_terminal() {
            self.finish();
        } else if self.mode.engine_mark() == Some(self.to_move) {
            self.engine_turn();
        } else {
            self.prompt();
        }
    }

    /// Abandons the current game and starts a new one.
    #[instrument(skip(self), fields(game = %self.game))]
    pub fn restart(&mut self) {
        // Unfinished games keep a counter entry; this game is ours to drop.
        self.engine.selector().counter().remove(&self.game);

        self.games_played += 1;
        self.game = GameId::from(format!("tui-{}", self.games_played));
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.cursor = Position::Center;
        info!(game = %self.game, "Restarted game");
        self.begin();
    }

    fn begin(&mut self) {
        self.to_move = Mark::X;
        if self.mode.engine_mark() == Some(Mark::X) {
            self.engine_turn();
        } else {
            self.prompt();
        }
    }

    fn engine_turn(&mut self) {
        let Mode::VsEngine { difficulty, ai } = self.mode else {
            return;
        };

        let turn = self
            .engine
            .play_in_game(&self.board, &self.game, difficulty, ai, &mut self.rng);
        self.board = turn.board;
        self.outcome = turn.outcome;
        self.to_move = ai.opponent();

        if self.outcome.is_terminal() {
            self.finish();
        } else {
            self.prompt();
            if let Some(pos) = turn.chosen.and_then(Position::from_index) {
                self.status_message =
                    format!("Engine played {}. {}", pos.label(), self.status_message);
            }
        }
    }

    fn finish(&mut self) {
        let result = match (self.outcome.winner(), self.mode) {
            (None, _) => "Draw!".to_string(),
            (Some(mark), Mode::TwoPlayer) => format!("Player {} wins!", mark),
            (Some(mark), Mode::VsEngine { ai, .. }) if mark == ai => "Engine wins!".to_string(),
            (Some(_), Mode::VsEngine { .. }) => "You win!".to_string(),
        };
        self.status_message = format!("{} Press 'r' to restart or 'q' to quit.", result);
        info!(outcome = ?self.outcome, "Game over");
    }
}
