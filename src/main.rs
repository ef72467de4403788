use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::RandomAgent;
use connect_four::config::AppConfig;
use connect_four::game::{GameEngine, GameMode};
use connect_four::logging;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer or a friend")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Start with a two-player game instead of playing the computer
    #[arg(long)]
    two_player: bool,

    /// Seed for the computer player's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Override the log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.two_player {
        config.game.mode = GameMode::TwoPlayer;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if let Some(path) = cli.log_file {
        config.log.file = path;
    }

    let level = logging::init_logging(&config.log.file, config.log.level_filter()?)
        .with_context(|| format!("setting up logging to {}", config.log.file.display()))?;
    info!("starting connect-four (log level {level})");

    let computer = match config.game.seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };
    let engine = GameEngine::with_agent(config.game.mode, Box::new(computer))
        .with_restart_policy(config.game.restart);
    let mut app = App::new(engine, &config.ui);

    run(&mut app).context("running terminal UI")?;
    info!("exiting");
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
