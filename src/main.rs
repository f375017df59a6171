// Entry point: config, logging, terminal setup, and teardown.

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use eventdesk::app::App;
use eventdesk::config::{AppConfig, paths};
use eventdesk::error::Result;
use eventdesk::logging;

fn main() {
    if let Err(e) = run() {
        let _ = restore_terminal();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;

    match paths::log_path() {
        Some(path) => logging::init(&path, &config.log_level)?,
        None => eprintln!("No data directory found; logging disabled"),
    }
    info!(page_size = config.page_size(), "starting eventdesk");

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore_terminal();
        original_hook(panic);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(&config);
    let result = app.run(&mut terminal);

    restore_terminal()?;
    if let Err(e) = &result {
        warn!(error = %e, "event loop failed");
    }
    info!("exiting eventdesk");

    result.map_err(Into::into)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
