//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::export::write_csv;
use crate::fetch::DataSource;
use crate::pipeline::{self, StatusLevel};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// How often the idle UI redraws.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Main TUI application.
pub struct App {
    source: Box<dyn DataSource>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates the app around a data source and pre-seeded state.
    pub fn new(source: Box<dyn DataSource>, state: AppState) -> Self {
        Self {
            source,
            state,
            should_quit: false,
        }
    }

    /// Runs the application until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(TICK_RATE);

        // Endpoints supplied on the command line are fetched right away.
        if !self.state.endpoints.is_empty() {
            self.fetch();
        }

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Fetch => self.fetch(),
                    KeyAction::Export => self.export(),
                    KeyAction::None => {}
                },
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Runs the consolidation pipeline over the current endpoint list.
    /// Each action starts from a clean slate; the fetch itself is
    /// synchronous and sequential, so the UI blocks until it finishes.
    fn fetch(&mut self) {
        self.state.events.clear();
        match pipeline::run(self.source.as_ref(), &self.state.endpoints) {
            Ok(report) => self.state.apply_report(report),
            Err(error) => self.state.apply_failure(error),
        }
    }

    /// Writes the consolidated table to the export file.
    fn export(&mut self) {
        let path = self.state.export_path.clone();
        match self.state.consolidated.as_ref() {
            Some(table) if !table.is_empty() => match write_csv(table, &path) {
                Ok(()) => self.state.push_status(
                    StatusLevel::Success,
                    format!("Exported {} rows to {}.", table.n_rows(), path.display()),
                ),
                Err(e) => self
                    .state
                    .push_status(StatusLevel::Error, format!("Export failed: {}", e)),
            },
            _ => self.state.push_status(
                StatusLevel::Warning,
                "Nothing to export yet. Fetch some data first.".to_string(),
            ),
        }
    }
}
