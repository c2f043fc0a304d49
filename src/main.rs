use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tui_reversi::config::AppConfig;
use tui_reversi::ui::App;

/// Play Reversi in the terminal.
#[derive(Parser)]
#[command(name = "tui-reversi", about = "Play Reversi in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Override the save-slot path from the config
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(save) = cli.save {
        config.save_path = save;
    }

    let mut app = App::new(&config);
    run_terminal(&mut app).context("running the terminal UI")?;
    Ok(())
}

fn run_terminal(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
