//! Event handling over the progress and notes stores
//!
//! `Tracker` owns both stores and the UI state, and turns key presses and
//! commands into store mutations. It has no terminal, so it can be driven
//! directly in tests.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::command::{Command, ParseResult, parse_command};
use super::input::Action;
use super::state::{AppState, CommandMode, Screen};
use crate::catalog::Problem;
use crate::notes::NotesStore;
use crate::progress::ProgressStore;
use crate::stats::ProblemStats;
use crate::storage::KeyValueStore;
use crate::view::{ProblemView, week_options};

/// Stores plus the state needed to present them
#[derive(Debug)]
pub struct Tracker<S: KeyValueStore> {
    pub progress: ProgressStore<S>,
    pub notes: NotesStore<S>,
    pub state: AppState,
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn new(progress: ProgressStore<S>, notes: NotesStore<S>, state: AppState) -> Self {
        Self { progress, notes, state }
    }

    /// Load both stores and make sure the active week exists
    pub fn initialize(&mut self) -> Result<()> {
        self.progress.initialize()?;
        self.notes.initialize()?;
        self.ensure_valid_week();
        Ok(())
    }

    /// Fall back to the first week if the active one is not in the store
    pub fn ensure_valid_week(&mut self) {
        let weeks = self.weeks();
        if !weeks.contains(&self.state.query.week) {
            if let Some(first) = weeks.first() {
                self.state.set_week(*first);
            }
        }
    }

    /// Current filtered view
    pub fn view(&self) -> ProblemView<'_> {
        ProblemView::build(&self.progress, &self.state.query)
    }

    /// Statistics over the full store
    pub fn stats(&self) -> ProblemStats {
        ProblemStats::compute(self.progress.problems())
    }

    /// Week selector options
    pub fn weeks(&self) -> Vec<u32> {
        week_options(self.progress.problems())
    }

    /// Problem under the cursor, if any
    pub fn selected_problem(&self) -> Option<&Problem> {
        self.view().flattened().get(self.state.list.selected_index).copied()
    }

    fn selected_title(&self) -> Option<String> {
        self.selected_problem().map(|p| p.title.clone())
    }

    fn visible_count(&self) -> usize {
        self.view().flattened().len()
    }

    /// Handle a key press, returns true if should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.state.command_line.is_input_mode() {
            return self.handle_input_key(key.code);
        }

        if self.state.screen == Screen::Help {
            // Any key closes help
            self.state.screen = Screen::Main;
            return Ok(false);
        }

        match self.state.keys.action(key) {
            Some(action) => self.handle_action(action),
            None => Ok(false),
        }
    }

    /// Apply a normal-mode action, returns true if should exit
    pub fn handle_action(&mut self, action: Action) -> Result<bool> {
        let len = self.visible_count();
        let half = self.state.list.half_page();
        let page = (self.state.list.visible_height.max(1)) as isize;

        match action {
            Action::Up => self.state.list.move_by(-1, len),
            Action::Down => self.state.list.move_by(1, len),
            Action::Top => self.state.list.move_by(isize::MIN / 2, len),
            Action::Bottom => self.state.list.move_by(isize::MAX / 2, len),
            Action::HalfPageUp => self.state.list.move_by(-half, len),
            Action::HalfPageDown => self.state.list.move_by(half, len),
            Action::PageUp => self.state.list.move_by(-page, len),
            Action::PageDown => self.state.list.move_by(page, len),
            Action::PrevWeek => {
                let weeks = self.weeks();
                self.state.step_week(&weeks, -1);
            }
            Action::NextWeek => {
                let weeks = self.weeks();
                self.state.step_week(&weeks, 1);
            }
            Action::JumpToWeek(week) => {
                if self.weeks().contains(&week) {
                    self.state.set_week(week);
                }
            }
            Action::CycleFilter => {
                let next = self.state.query.filter.next();
                self.state.set_filter(next);
                self.state.command_line.set_message(format!("Filter: {next}"));
            }
            Action::ToggleComplete => self.toggle_selected()?,
            Action::EditNote => self.start_note_edit(),
            Action::Command => self.state.command_line.enter_mode(CommandMode::Command, ""),
            Action::Search => {
                self.state.search_before = self.state.query.search.clone();
                let current = self.state.query.search.clone();
                self.state.command_line.enter_mode(CommandMode::Search, &current);
            }
            Action::Back => self.state.command_line.clear_message(),
            Action::Help => self.state.screen = Screen::Help,
            Action::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Handle a key while the command line is accepting input
    fn handle_input_key(&mut self, key: KeyCode) -> Result<bool> {
        let mode = self.state.command_line.mode;
        let cl = &mut self.state.command_line;

        match key {
            KeyCode::Esc => {
                cl.exit_input_mode();
                match mode {
                    CommandMode::Search => {
                        let previous = std::mem::take(&mut self.state.search_before);
                        self.state.set_search(previous);
                    }
                    CommandMode::Note => self.state.editing_note = None,
                    _ => {}
                }
                return Ok(false);
            }
            KeyCode::Enter => return self.submit_input(mode),
            KeyCode::Char(c) => cl.insert_char(c),
            KeyCode::Backspace => cl.delete_char(),
            KeyCode::Delete => cl.delete_char_forward(),
            KeyCode::Left => cl.move_left(),
            KeyCode::Right => cl.move_right(),
            KeyCode::Home => cl.move_start(),
            KeyCode::End => cl.move_end(),
            KeyCode::Up if mode == CommandMode::Command => cl.history_up(),
            KeyCode::Down if mode == CommandMode::Command => cl.history_down(),
            _ => {}
        }

        // Search filters as you type
        if mode == CommandMode::Search {
            let text = self.state.command_line.input.clone();
            self.state.set_search(text);
        }
        Ok(false)
    }

    fn submit_input(&mut self, mode: CommandMode) -> Result<bool> {
        let input = self.state.command_line.input.clone();
        self.state.command_line.exit_input_mode();

        match mode {
            CommandMode::Command => {
                self.state.command_line.add_to_history(input.clone());
                match parse_command(&input) {
                    ParseResult::Ok(command) => self.execute(command),
                    ParseResult::UnknownCommand(cmd) => {
                        self.state.command_line.set_error(format!("Unknown command: {cmd}"));
                        Ok(false)
                    }
                    ParseResult::MissingArgument(cmd) => {
                        self.state.command_line.set_error(format!(":{cmd} needs an argument"));
                        Ok(false)
                    }
                    ParseResult::InvalidArgument(msg) => {
                        self.state.command_line.set_error(msg);
                        Ok(false)
                    }
                }
            }
            CommandMode::Search => {
                self.state.set_search(input);
                Ok(false)
            }
            CommandMode::Note => {
                if let Some(title) = self.state.editing_note.take() {
                    self.notes.set_note(&title, &input)?;
                    self.state.command_line.set_message(format!("Saved note for {title}"));
                }
                Ok(false)
            }
            CommandMode::Normal => Ok(false),
        }
    }

    /// Run a parsed command, returns true if should exit
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Quit => return Ok(true),
            Command::Help => self.state.screen = Screen::Help,
            Command::Week(week) => {
                if self.weeks().contains(&week) {
                    self.state.set_week(week);
                } else {
                    self.state.command_line.set_error(format!("No week {week} in the catalog"));
                }
            }
            Command::Filter(filter) => self.state.set_filter(filter),
            Command::Search(text) => self.state.set_search(text),
            Command::ClearSearch => self.state.set_search(""),
            Command::Note(text) => match self.selected_title() {
                Some(title) => {
                    self.notes.set_note(&title, &text)?;
                    self.state.command_line.set_message(format!("Saved note for {title}"));
                }
                None => self.state.command_line.set_error("No problem selected"),
            },
            Command::Toggle => self.toggle_selected()?,
            Command::Nop => self.state.command_line.clear_message(),
        }
        Ok(false)
    }

    fn toggle_selected(&mut self) -> Result<()> {
        let Some(title) = self.selected_title() else {
            self.state.command_line.set_error("No problem selected");
            return Ok(());
        };

        self.progress.toggle_completion(&title)?;

        let done = self.progress.get(&title).is_some_and(|p| p.completed);
        let verb = if done { "Completed" } else { "Reopened" };
        self.state.command_line.set_message(format!("{verb}: {title}"));

        // The item may have left a completed/pending view
        let len = self.visible_count();
        self.state.list.clamp(len);
        Ok(())
    }

    fn start_note_edit(&mut self) {
        let Some(title) = self.selected_title() else {
            self.state.command_line.set_error("No problem selected");
            return;
        };
        let existing = self.notes.note_or_empty(&title).to_string();
        self.state.editing_note = Some(title);
        self.state.command_line.enter_mode(CommandMode::Note, &existing);
    }
}
