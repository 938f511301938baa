use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tasklist::{cli::Cli, ui::run_app, App};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tasklist::cli::init_tracing(&cli)?;
    info!(today = ?cli.today, "starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, cli.today);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!("ui loop failed: {err}");
    }
    let stats = app.tasks.stats();
    info!(completed = stats.completed, total = stats.total, "exiting");
    result?;
    Ok(())
}
