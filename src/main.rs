// stackcalc: bounded RPN stack calculator

use std::fs::File;
use std::io;
use std::panic;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use stackcalc::config::Config;
use stackcalc::interpreter::session::Session;
use stackcalc::logger::{InteractionLog, LogFile};
use stackcalc::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_tracing(&config)?;

    let log_file = LogFile::create(&config.log).map_err(|e| {
        format!("cannot create log file '{}': {}", config.log.display(), e)
    })?;

    if config.tui {
        run_tui(log_file)?;
    } else {
        let stdout = io::stdout();
        let mut session = Session::new(InteractionLog::new(stdout.lock(), Some(log_file)));
        session.run(io::stdin().lock())?;
    }

    Ok(())
}

/// Diagnostics go to stderr, or to `--trace-file`; the TUI owns the screen so
/// it only traces to a file.
fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        || EnvFilter::try_from_env("STACKCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = &config.trace_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if !config.tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_tui(log_file: LogFile) -> Result<(), Box<dyn std::error::Error>> {
    // Leave raw mode before the panic message is printed
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let session = Session::new(InteractionLog::new(io::sink(), Some(log_file)));
    let res = App::new(session).and_then(|mut app| app.run(&mut terminal));

    // Restore terminal
    restore_terminal();
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "failed to leave alternate screen");
    }
}
