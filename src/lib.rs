//! aigames - tic-tac-toe AI move engine
//!
//! Serves the engine from [`aigames_tictactoe`] over HTTP and in the
//! terminal.
//!
//! # Architecture
//!
//! - **Server**: axum routes for moves, counter reset and liveness
//! - **Config**: TOML server configuration with CLI overrides
//! - **Logging**: tracing subscriber with a reloadable filter
//! - **TUI**: play against the engine locally
//!
//! # Example
//!
//! ```no_run
//! use aigames::{ServerConfig, server};
//! use aigames_tictactoe::Engine;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default().with_port(8000);
//! server::serve(&config, Engine::default()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod logging;
pub mod server;
pub mod tui;

pub use config::{ConfigError, ServerConfig};
pub use server::{ApiError, Banner, ErrorBody, Health, ResetResponse};
