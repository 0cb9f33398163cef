//! Terminal play mode: a human against the engine, or two humans.

mod app;
mod input;
mod ui;

pub use app::{App, Mode};

use aigames_tictactoe::Engine;
use anyhow::{Context, Result, anyhow};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};

/// File the terminal play mode logs to.
pub const LOG_FILE: &str = "aigames_tui.log";

/// Runs the terminal UI until the user quits.
#[instrument(skip(engine))]
pub fn run_tui(engine: Engine, mode: Mode) -> Result<()> {
    init_file_logging(Path::new(LOG_FILE))?;
    info!(?mode, "Starting terminal play mode");

    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(engine, StdRng::from_entropy(), mode);
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Sends tracing output to `path` so it does not draw over the UI.
///
/// Fails if the file cannot be created or a global subscriber is
/// already installed.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create TUI log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install TUI logger: {}", e))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs a restore action when dropped, including on early `?` returns.
struct RestoreOnDrop<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn run_app<R: rand::Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            info!("User quit");
            return Ok(());
        }
    }
}
