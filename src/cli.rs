//! Command-line interface for aigames.

use aigames_tictactoe::{Difficulty, Mark};
use clap::{Parser, Subcommand};

/// Tic-tac-toe move engine
#[derive(Parser, Debug)]
#[command(name = "aigames")]
#[command(about = "Tic-tac-toe AI move engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "aigames.toml")]
        config: std::path::PathBuf,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Origin allowed by CORS, repeatable (overrides the config file)
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origins: Vec<String>,
    },

    /// Compute a single move and print the JSON response
    Move {
        /// Nine cells, row-major: X, O, and '.', '_' or ' ' for empty
        #[arg(short, long)]
        board: String,

        /// easy or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Mark the engine plays
        #[arg(long, default_value = "O")]
        ai: Mark,
    },

    /// Play against the engine in the terminal
    Play {
        /// easy or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Mark the engine plays (X moves first)
        #[arg(long, default_value = "O")]
        ai: Mark,

        /// Two people take turns at the keyboard; the engine does not play
        #[arg(long)]
        two_player: bool,
    },
}

/// Expands a compact board argument into wire cells.
///
/// Unknown characters are passed through so the engine's decoder can
/// report them.
pub fn board_cells(arg: &str) -> Vec<String> {
    arg.chars()
        .map(|c| match c {
            'x' | 'X' => "X".to_string(),
            'o' | 'O' => "O".to_string(),
            '.' | '_' | '-' | ' ' => " ".to_string(),
            other => other.to_string(),
        })
        .collect()
}
