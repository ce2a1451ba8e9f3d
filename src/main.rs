mod app;
mod config;
mod confirm;
mod domain;
mod error;
mod input;
mod logging;
mod persistence;
mod ui;

use anyhow::{Context as _, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{Settings, POLL_INTERVAL};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_dir, init_local_data_dir, FileStore, Persistence};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "worktrip")]
#[command(about = "A two-context (Work / Travel) terminal task list", long_about = None)]
struct Cli {
    /// Directory holding the stored lists. Defaults to the nearest .worktrip, then ~/.worktrip
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log filter (e.g. "worktrip=debug"). Overrides WORKTRIP_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .worktrip directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_data_dir(&current_dir)?;
            println!("Initialized worktrip directory: {}", dir.display());
            Ok(())
        }
        None => {
            let settings = Settings::resolve(cli.data_dir, cli.log_level)?;
            run_tui(&settings)
        }
    }
}

fn run_tui(settings: &Settings) -> Result<()> {
    ensure_dir(&settings.data_dir)?;
    logging::init_logging(settings)?;
    info!(data_dir = %settings.data_dir.display(), "starting");

    // Load before touching the terminal so errors print normally
    let persistence = Persistence::new(FileStore::new(&settings.data_dir));
    let mut app = AppState::load(persistence)
        .with_context(|| format!("Failed to load lists from {}", settings.data_dir.display()))?;
    app.sync_storage();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}
