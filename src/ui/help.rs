//! Key reference screen

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("j / k", "move selection"),
    ("g / G", "first / last problem"),
    ("space, m, Enter", "toggle completion"),
    ("e", "edit note"),
    ("f", "cycle filter"),
    ("h / l, [ / ]", "previous / next week"),
    ("1-9", "jump to week"),
    ("/", "search titles, themes and techniques"),
    (":week N", "jump to week"),
    (":filter F", "all, completed, pending, easy, medium, hard"),
    (":note TEXT", "set note on selection"),
    (":clear", "clear search"),
    (":q", "quit"),
];

/// Draw the help screen
pub fn draw(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .title(" Help · any key to close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_active))
        .style(Style::default().bg(theme.background));

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:>18}  "),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block).alignment(Alignment::Left), area);
}
