//! UI rendering components

pub mod command_line;
pub mod dashboard;
pub mod help;
pub mod main_screen;
pub mod notes_panel;
pub mod problem_list;

use ratatui::Frame;

use crate::app::Tracker;
use crate::app::state::Screen;
use crate::storage::KeyValueStore;
use crate::theme::Theme;

/// Main draw function
pub fn draw<S: KeyValueStore>(frame: &mut Frame, tracker: &mut Tracker<S>, theme: &Theme) {
    match tracker.state.screen {
        Screen::Main => main_screen::draw(frame, tracker, theme),
        Screen::Help => help::draw(frame, theme),
    }
}
