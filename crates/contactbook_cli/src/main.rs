//! Phone book terminal window.
//!
//! # Responsibility
//! - Resolve fixed paths, start file logging and open the contact view.
//! - Own the terminal: raw mode, alternate screen, draw/input loop.
//!
//! # Invariants
//! - The terminal is restored before any fatal error is printed.

mod app;
mod config;
mod keybindings;
mod ui;

use std::error::Error;
use std::io;

use contactbook_core::{init_logging, ContactStore, ContactView, SqliteContactStore};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use config::AppConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::resolve()?;
    init_logging(config.log_level, &config.log_dir)?;
    info!(
        "event=cli_start module=cli status=ok core_ping={} core_version={}",
        contactbook_core::ping(),
        contactbook_core::core_version()
    );

    // Storage errors must surface before raw mode starts.
    let store = SqliteContactStore::new(&config.db_path);
    let view = ContactView::open(store).map_err(|err| {
        error!("event=cli_start module=cli status=error error={err}");
        err
    })?;
    let mut app = App::new(view);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    match res.and(restored) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            Ok(())
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            Err(err.into())
        }
    }
}

/// Runs every restore step even if an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    first_failure([raw_mode, screen, cursor])
}

fn first_failure(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

fn run_app<B: ratatui::backend::Backend, S: ContactStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::first_failure;
    use std::io;

    #[test]
    fn first_failure_is_ok_when_every_step_succeeds() {
        assert!(first_failure([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn first_failure_reports_earliest_error() {
        let steps = [
            Ok(()),
            Err(io::Error::other("leave alternate screen")),
            Err(io::Error::other("show cursor")),
        ];

        let err = first_failure(steps).unwrap_err();

        assert_eq!(err.to_string(), "leave alternate screen");
    }
}
