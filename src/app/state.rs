//! Application state definitions

use super::input::KeyMap;
use crate::view::{StatusFilter, ViewQuery};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    Help,
}

/// Selection and scroll state for the problem list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Index into the flattened, visible problems
    pub selected_index: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Visible height in rows (updated on render)
    pub visible_height: usize,
}

impl ListState {
    /// Move the selection by `delta`, clamped to `len` items
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected_index = 0;
            return;
        }
        let max = len as isize - 1;
        self.selected_index = (self.selected_index as isize + delta).clamp(0, max) as usize;
    }

    /// Keep the selection inside a list of `len` items
    pub fn clamp(&mut self, len: usize) {
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Jump back to the first item
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Half the visible height, at least one row
    pub fn half_page(&self) -> isize {
        (self.visible_height / 2).max(1) as isize
    }

    /// Ensure the selected row is visible by adjusting scroll offset
    pub fn ensure_visible(&mut self, selected_row: usize) {
        // Don't scroll past the selection (top)
        if selected_row < self.scroll_offset {
            self.scroll_offset = selected_row;
        }
        // Don't let selection go below visible area (bottom)
        if self.visible_height > 0 && selected_row >= self.scroll_offset + self.visible_height {
            self.scroll_offset = selected_row + 1 - self.visible_height;
        }
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Normal mode - command line hidden or showing status
    #[default]
    Normal,
    /// Command mode - accepting : commands
    Command,
    /// Search mode - live / search text
    Search,
    /// Editing the note of the selected problem
    Note,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor: usize,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 200;

    /// Start an input mode with `initial` text and the cursor at its end
    pub fn enter_mode(&mut self, mode: CommandMode, initial: &str) {
        self.mode = mode;
        self.input = initial.to_string();
        self.cursor = self.char_count();
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor (cursor is character index)
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Prefix shown before the input for the current mode
    pub fn prefix(&self) -> &'static str {
        match self.mode {
            CommandMode::Normal => "",
            CommandMode::Command => ":",
            CommandMode::Search => "/",
            CommandMode::Note => "note> ",
        }
    }

    /// Check if we're in input mode
    pub fn is_input_mode(&self) -> bool {
        self.mode != CommandMode::Normal
    }

    /// Add to history
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history_index = match self.history_index {
            None => Some(self.history.len() - 1),
            Some(i) => Some(i.saturating_sub(1)),
        };
        if let Some(i) = self.history_index {
            self.input = self.history[i].clone();
            self.cursor = self.char_count();
        }
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else { return };
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.input = self.history[i + 1].clone();
        } else {
            self.history_index = None;
            self.input.clear();
        }
        self.cursor = self.char_count();
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Active filter, search and week
    pub query: ViewQuery,

    /// Problem list selection
    pub list: ListState,

    /// Command line state
    pub command_line: CommandLineState,

    /// Title whose note is being edited
    pub editing_note: Option<String>,

    /// Search text to restore if a live search is cancelled
    pub search_before: String,

    /// Normal-mode key bindings
    pub keys: KeyMap,
}

impl AppState {
    /// State opened on `week`
    pub fn with_week(week: u32) -> Self {
        Self { query: ViewQuery { week, ..Default::default() }, ..Default::default() }
    }

    /// Select the week after (or before, for negative `step`) the active one
    ///
    /// `weeks` is the selector order. Returns false if already at the end.
    pub fn step_week(&mut self, weeks: &[u32], step: isize) -> bool {
        let Some(current) = weeks.iter().position(|w| *w == self.query.week) else {
            return match weeks.first() {
                Some(first) => self.set_week(*first),
                None => false,
            };
        };

        let target = current as isize + step;
        if target < 0 || target >= weeks.len() as isize {
            return false;
        }
        self.set_week(weeks[target as usize])
    }

    /// Switch to `week`, resetting the selection. Returns whether it changed.
    pub fn set_week(&mut self, week: u32) -> bool {
        if self.query.week == week {
            return false;
        }
        self.query.week = week;
        self.list.reset();
        true
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.query.filter = filter;
        self.list.reset();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.list.reset();
    }
}
