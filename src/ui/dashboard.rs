//! Stat cards and difficulty breakdown

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::catalog::Difficulty;
use crate::stats::{DifficultyProgress, ProblemStats};
use crate::theme::Theme;

/// Draw the four headline cards
pub fn draw_cards(frame: &mut Frame, area: Rect, stats: &ProblemStats, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let cards = [
        ("Total Problems", stats.total.to_string(), format!("+{}", stats.completed), theme.info),
        ("Completed", stats.completed.to_string(), format!("{}%", stats.progress), theme.done),
        (
            "Progress",
            format!("{}%", stats.progress),
            format!("{} left", stats.total - stats.completed),
            theme.highlight,
        ),
        ("Streak", stats.streak.to_string(), "days".to_string(), theme.streak),
    ];

    for ((title, value, detail, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        draw_card(frame, *chunk, title, value, detail, color, theme);
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    detail: String,
    color: Color,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));

    let line = Line::from(vec![
        Span::styled(value, Style::default().fg(theme.text_bright).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(detail, Style::default().fg(color)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw one gauge per difficulty bucket
pub fn draw_breakdown(frame: &mut Frame, area: Rect, stats: &ProblemStats, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (difficulty, chunk) in Difficulty::ALL.into_iter().zip(chunks.iter()) {
        let bucket = stats.bucket(difficulty);
        let color = theme.difficulty_color(difficulty);

        let block = Block::default()
            .title(format!(" {difficulty} "))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background));

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(color).bg(theme.surface))
            .ratio(bucket.ratio())
            .label(bucket_label(bucket));

        frame.render_widget(gauge, *chunk);
    }
}

/// Gauge label: "3/10 · 30% · 7 left"
fn bucket_label(bucket: &DifficultyProgress) -> String {
    format!(
        "{}/{} · {}% · {} left",
        bucket.completed,
        bucket.total,
        bucket.percent(),
        bucket.remaining()
    )
}
