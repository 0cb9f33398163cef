//! Tic-tac-toe move engine.
//!
//! Given a board and the mark it plays, the engine picks a square:
//!
//! - **Hard**: exhaustive minimax, never loses.
//! - **Easy**: random on the engine's odd-numbered moves in a game,
//!   minimax on the even-numbered ones. Move numbers are tracked per
//!   game in a shared [`MoveCounter`].
//!
//! # Example
//!
//! ```
//! use aigames_tictactoe::{Difficulty, Engine, Mark, MoveRequest};
//!
//! let engine = Engine::default();
//! let board = ["X", "X", " ", "O", "O", " ", " ", " ", " "]
//!     .map(String::from)
//!     .to_vec();
//! let response = engine
//!     .ai_move(&MoveRequest::new(board, Difficulty::Hard, Mark::X))
//!     .unwrap();
//! assert_eq!(response.chosen, 2);
//! assert_eq!(response.winner.as_deref(), Some("X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod counter;
mod engine;
mod error;
mod position;
pub mod rules;
pub mod search;
mod selector;
mod types;

pub use counter::MoveCounter;
pub use engine::{Engine, MoveRequest, MoveResponse, Turn};
pub use error::{ParseError, ParseErrorKind};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use search::{Score, best_move, score};
pub use selector::{MoveSelector, select_random};
pub use types::{Board, Difficulty, GameId, Mark, Square};
