//! Details and notes for the selected problem

use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::catalog::Problem;
use crate::theme::Theme;

/// Draw the notes panel
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    selected: Option<&Problem>,
    note: Option<&str>,
    editing: bool,
    theme: &Theme,
) {
    if area.width == 0 {
        return;
    }

    let border_color = if editing { theme.border_active } else { theme.border };

    let block = Block::default()
        .title(" Notes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(problem) = selected else {
        draw_empty_message(frame, inner, theme, "No problem selected");
        return;
    };

    let lines = detail_lines(problem, note, editing, theme);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn detail_lines(
    problem: &Problem,
    note: Option<&str>,
    editing: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.text_dim);
    let mut lines = vec![
        Line::from(Span::styled(
            problem.title.clone(),
            Style::default().fg(theme.text_bright).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                problem.difficulty.to_string(),
                Style::default().fg(theme.difficulty_color(problem.difficulty)),
            ),
            Span::styled(format!(" · Week {} · Day {}", problem.week, problem.day), muted),
        ]),
        Line::from(Span::styled(format!("{} · {}", problem.theme, problem.technique), muted)),
    ];

    if let Some(reference) = &problem.external_reference {
        lines.push(Line::from(Span::styled(format!("LeetCode {reference}"), muted)));
    }
    lines.push(Line::from(Span::styled(
        format!("Solve: {}", problem.leetcode_url()),
        Style::default().fg(theme.info).add_modifier(Modifier::UNDERLINED),
    )));

    if let Some(date) = problem.completed_date {
        let local = date.with_timezone(&Local);
        lines.push(Line::from(Span::styled(
            format!("Completed {}", local.format("%a %b %e %Y %H:%M")),
            Style::default().fg(theme.done),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "─ Notes ─",
        Style::default().fg(theme.text_dim).add_modifier(Modifier::BOLD),
    )));

    if editing {
        lines.push(Line::from(Span::styled(
            "Editing in the command line (Enter saves, Esc cancels)",
            Style::default().fg(theme.highlight),
        )));
    } else {
        match note.filter(|n| !n.is_empty()) {
            Some(text) => {
                lines.extend(
                    text.lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme.text)))),
                );
            }
            None => lines.push(Line::from(Span::styled("No notes yet. Press e to add one.", muted))),
        }
    }

    lines
}

fn draw_empty_message(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let msg = Paragraph::new(message.to_string())
        .style(Style::default().fg(theme.text_dim))
        .wrap(Wrap { trim: true });
    frame.render_widget(msg, area);
}
