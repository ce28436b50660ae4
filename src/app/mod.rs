//! Terminal dashboard
//!
//! `App` owns the terminal and a [`Tracker`] backed by files on disk. All
//! behaviour lives in the tracker; this module only draws and forwards keys.

pub mod command;
pub mod input;
pub mod state;
pub mod tracker;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::notes::NotesStore;
use crate::progress::ProgressStore;
use crate::storage::FileStore;
use crate::theme::Theme;
use crate::ui;
pub use input::{Action, KeyMap};
pub use state::AppState;
pub use tracker::Tracker;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The dashboard application
pub struct App {
    theme: Theme,
    tracker: Tracker<FileStore>,
    terminal: Tui,
}

impl App {
    /// Load both stores from `storage` and take over the terminal
    pub fn new(config: Config, storage: FileStore) -> Result<Self> {
        let mut state = AppState::with_week(config.default_week);
        state.keys = KeyMap { vim: config.vim_mode };

        let mut tracker =
            Tracker::new(ProgressStore::new(storage.clone()), NotesStore::new(storage), state);
        tracker.initialize()?;
        tracing::info!(
            "Loaded {} problems and {} notes",
            tracker.progress.len(),
            tracker.notes.len()
        );

        let terminal = enter_terminal()?;
        Ok(Self { theme: config.active_theme(), tracker, terminal })
    }

    /// Draw and handle keys until the user quits
    pub async fn run(&mut self) -> Result<()> {
        // Leave the alternate screen before a panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            let tracker = &mut self.tracker;
            let theme = &self.theme;
            self.terminal.draw(|frame| ui::draw(frame, tracker, theme))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.tracker.handle_key(key) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => {
                    // Store writes failed; keep running with the in-memory state
                    tracing::error!("Error handling key: {e:#}");
                    self.tracker.state.command_line.set_error(e.to_string());
                }
            }
        }

        leave_terminal(&mut self.terminal)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = leave_terminal(&mut self.terminal);
    }
}

fn enter_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
