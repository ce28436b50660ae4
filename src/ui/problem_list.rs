//! Week selector, filter controls and the grouped problem list

use std::collections::BTreeMap;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::ListState;
use crate::catalog::Problem;
use crate::theme::Theme;
use crate::view::{ProblemView, ViewQuery};

/// Status indicators for problems
const STATUS_PENDING: &str = "○";
const STATUS_COMPLETED: &str = "✓";
/// Marker for problems that carry a note
const NOTE_MARKER: &str = "✎";

/// Draw the week selector, active filter and search text
pub fn draw_controls(
    frame: &mut Frame,
    area: Rect,
    query: &ViewQuery,
    weeks: &[u32],
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));

    let mut spans = vec![Span::styled("Week ", Style::default().fg(theme.text_dim))];
    for week in weeks {
        let style = if *week == query.week {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(format!(" {week} "), style));
    }

    spans.push(Span::styled("  │  Filter: ", Style::default().fg(theme.text_dim)));
    spans.push(Span::styled(query.filter.to_string(), Style::default().fg(theme.highlight)));

    if !query.search.is_empty() {
        spans.push(Span::styled("  │  Search: ", Style::default().fg(theme.text_dim)));
        spans.push(Span::styled(query.search.clone(), Style::default().fg(theme.info)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the problems of the active week grouped by day
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    view: &ProblemView<'_>,
    list: &mut ListState,
    notes: &BTreeMap<String, String>,
    week: u32,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" Week {week} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_active))
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Update visible height for scroll calculations
    list.visible_height = inner.height as usize;

    let message = match view {
        ProblemView::NotLoaded => Some("Loading…"),
        ProblemView::NoResults => {
            Some("No problems match the current filter.\n\nTry another week, filter, or search.")
        }
        ProblemView::Days(_) => None,
    };
    if let Some(message) = message {
        let msg = Paragraph::new(message)
            .style(Style::default().fg(theme.text_dim))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    let (lines, selected_row) = build_lines(view, list.selected_index, notes, theme);
    if let Some(row) = selected_row {
        list.ensure_visible(row);
    }

    let visible: Vec<Line> =
        lines.into_iter().skip(list.scroll_offset).take(inner.height as usize).collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

/// Render rows for every day group; returns the row of the selected problem
fn build_lines(
    view: &ProblemView<'_>,
    selected_index: usize,
    notes: &BTreeMap<String, String>,
    theme: &Theme,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut selected_row = None;
    let mut flat_index = 0;

    for group in view.groups() {
        let done = group.problems.iter().filter(|p| p.completed).count();
        lines.push(Line::from(vec![
            Span::styled(
                group.label(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", group.subtitle()), Style::default().fg(theme.text)),
            Span::styled(
                format!("  {}/{}", done, group.problems.len()),
                Style::default().fg(theme.text_dim),
            ),
        ]));

        for problem in &group.problems {
            let is_selected = flat_index == selected_index;
            if is_selected {
                selected_row = Some(lines.len());
            }
            let has_note = notes.get(&problem.title).is_some_and(|n| !n.is_empty());
            lines.push(problem_line(problem, is_selected, has_note, theme));
            flat_index += 1;
        }
    }

    (lines, selected_row)
}

fn problem_line(problem: &Problem, selected: bool, has_note: bool, theme: &Theme) -> Line<'static> {
    let (status, status_color) = if problem.completed {
        (STATUS_COMPLETED, theme.done)
    } else {
        (STATUS_PENDING, theme.text_dim)
    };

    let title_style = if selected {
        Style::default().fg(theme.background).bg(theme.accent).add_modifier(Modifier::BOLD)
    } else if problem.completed {
        Style::default().fg(theme.text_dim).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text_bright)
    };

    let mut spans = vec![
        Span::styled(format!("  {status} "), Style::default().fg(status_color)),
        Span::styled(problem.title.clone(), title_style),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", problem.difficulty),
            Style::default().fg(theme.difficulty_color(problem.difficulty)),
        ),
        Span::styled(format!(" {}", problem.technique), Style::default().fg(theme.text_dim)),
    ];

    if let Some(reference) = &problem.external_reference {
        spans.push(Span::styled(format!(" {reference}"), Style::default().fg(theme.text_dim)));
    }
    if has_note {
        spans.push(Span::styled(format!(" {NOTE_MARKER}"), Style::default().fg(theme.note)));
    }

    Line::from(spans)
}
