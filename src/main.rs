//! aigames - unified CLI
//!
//! Serves the move engine over HTTP, computes one-off moves, or plays in
//! the terminal.

#![warn(missing_docs)]

use aigames::cli::{Cli, Command, board_cells};
use aigames::{ServerConfig, logging, server, tui};
use aigames_tictactoe::{Difficulty, Engine, Mark, MoveCounter, MoveRequest};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let engine = Engine::new(MoveCounter::new());

    match cli.command {
        Command::Serve {
            config,
            port,
            host,
            allow_origins,
        } => run_server(engine, config, port, host, allow_origins).await,
        Command::Move {
            board,
            difficulty,
            ai,
        } => run_move(engine, &board, difficulty, ai),
        Command::Play {
            difficulty,
            ai,
            two_player,
        } => {
            let mode = if two_player {
                tui::Mode::TwoPlayer
            } else {
                tui::Mode::VsEngine { difficulty, ai }
            };
            tui::run_tui(engine, mode)
        }
    }
}

/// Run the HTTP server
async fn run_server(
    engine: Engine,
    config_path: PathBuf,
    port: Option<u16>,
    host: Option<String>,
    allow_origins: Vec<String>,
) -> Result<()> {
    // Start logging first so config loading is visible, then narrow to
    // the configured filter.
    let filter = logging::init(logging::DEFAULT_FILTER);

    let mut config = ServerConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if !allow_origins.is_empty() {
        config = config.with_allowed_origins(allow_origins);
    }

    logging::apply_config_filter(&filter, config.log_filter())?;
    info!(?config, "Starting aigames server");

    server::serve(&config, engine).await
}

/// Compute one move and print the response as JSON
#[instrument(skip(engine))]
fn run_move(engine: Engine, board: &str, difficulty: Difficulty, ai: Mark) -> Result<()> {
    logging::init("warn");

    let request = MoveRequest::new(board_cells(board), difficulty, ai);
    let response = engine.ai_move(&request).context("Invalid board")?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
