//! Key bindings for the dashboard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Moving through the problem list
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,

    // Week and filter selection
    PrevWeek,
    NextWeek,
    JumpToWeek(u32),
    CycleFilter,

    // Progress and notes
    ToggleComplete,
    EditNote,

    // Modes
    Command,
    Search,
    Back,
    Help,
    Quit,
}

/// Normal-mode key bindings
///
/// Arrow keys, brackets and the letter commands always work. With `vim`
/// set, `h`/`j`/`k`/`l`/`g`/`G` move as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub vim: bool,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self { vim: true }
    }
}

impl KeyMap {
    /// Resolve a key press to an action
    pub fn action(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return ctrl_action(key.code);
        }
        if self.vim {
            if let Some(action) = vim_motion(key.code) {
                return Some(action);
            }
        }
        plain_action(key.code)
    }
}

fn ctrl_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('d') => Some(Action::HalfPageDown),
        KeyCode::Char('u') => Some(Action::HalfPageUp),
        KeyCode::Char('f') => Some(Action::PageDown),
        KeyCode::Char('b') => Some(Action::PageUp),
        KeyCode::Char('c') => Some(Action::Quit),
        _ => None,
    }
}

fn vim_motion(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Char('h') => Some(Action::PrevWeek),
        KeyCode::Char('l') => Some(Action::NextWeek),
        KeyCode::Char('g') => Some(Action::Top),
        KeyCode::Char('G') => Some(Action::Bottom),
        _ => None,
    }
}

fn plain_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Home => Some(Action::Top),
        KeyCode::End => Some(Action::Bottom),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Left | KeyCode::Char('[') => Some(Action::PrevWeek),
        KeyCode::Right | KeyCode::Char(']') => Some(Action::NextWeek),
        // 1-9 jump straight to a week; later weeks go through :week
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(Action::JumpToWeek),
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Enter => Some(Action::ToggleComplete),
        KeyCode::Char('e') => Some(Action::EditNote),
        KeyCode::Char(':') => Some(Action::Command),
        KeyCode::Char('/') => Some(Action::Search),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn vim_motions_when_enabled() {
        let keys = KeyMap::default();
        assert_eq!(keys.action(key(KeyCode::Char('j'))), Some(Action::Down));
        assert_eq!(keys.action(key(KeyCode::Char('l'))), Some(Action::NextWeek));
        assert_eq!(keys.action(key(KeyCode::Char('G'))), Some(Action::Bottom));
    }

    #[test]
    fn vim_motions_off_leaves_arrows() {
        let keys = KeyMap { vim: false };
        assert_eq!(keys.action(key(KeyCode::Char('j'))), None);
        assert_eq!(keys.action(key(KeyCode::Down)), Some(Action::Down));
        assert_eq!(keys.action(key(KeyCode::Char(']'))), Some(Action::NextWeek));
    }

    #[test]
    fn toggle_keys() {
        let keys = KeyMap::default();
        for code in [KeyCode::Char(' '), KeyCode::Char('m'), KeyCode::Enter] {
            assert_eq!(keys.action(key(code)), Some(Action::ToggleComplete));
        }
    }

    #[test]
    fn digits_jump_to_week() {
        let keys = KeyMap::default();
        assert_eq!(keys.action(key(KeyCode::Char('3'))), Some(Action::JumpToWeek(3)));
        assert_eq!(keys.action(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn ctrl_bindings() {
        let keys = KeyMap::default();
        assert_eq!(keys.action(ctrl('d')), Some(Action::HalfPageDown));
        assert_eq!(keys.action(ctrl('c')), Some(Action::Quit));
        // Ctrl-f pages rather than cycling the filter
        assert_eq!(keys.action(ctrl('f')), Some(Action::PageDown));
    }

    #[test]
    fn unbound_key() {
        assert_eq!(KeyMap::default().action(key(KeyCode::Char('x'))), None);
    }
}
