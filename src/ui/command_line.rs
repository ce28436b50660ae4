//! Bottom status and input line

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

const KEY_HINT: &str = "j/k move · space toggle · e note · f filter · [/] week · / search · ? help";

/// Draw the command line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = match state.mode {
        CommandMode::Normal => status_line(state, theme),
        mode => {
            let color = match mode {
                CommandMode::Search => theme.info,
                CommandMode::Note => theme.highlight,
                _ => theme.accent,
            };
            input_line(state, Style::default().fg(color), theme)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Last message, or the key hint when there is none
fn status_line(state: &CommandLineState, theme: &Theme) -> Line<'static> {
    match &state.message {
        Some(msg) if state.is_error => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error)))
        }
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.text))),
        None => Line::from(Span::styled(KEY_HINT, Style::default().fg(theme.text_dim))),
    }
}

/// Mode prefix followed by the input, with the cursor cell inverted
fn input_line(state: &CommandLineState, style: Style, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(state.prefix(), style.add_modifier(Modifier::BOLD))];

    let before: String = state.input.chars().take(state.cursor).collect();
    let at = state.input.chars().nth(state.cursor).unwrap_or(' ');
    let after: String = state.input.chars().skip(state.cursor + 1).collect();

    if !before.is_empty() {
        spans.push(Span::styled(before, style));
    }
    spans.push(Span::styled(
        at.to_string(),
        Style::default().fg(theme.background).bg(theme.cursor),
    ));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }

    Line::from(spans)
}
