//! Main dashboard screen

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{command_line, dashboard, notes_panel, problem_list};
use crate::app::Tracker;
use crate::stats::ProblemStats;
use crate::storage::KeyValueStore;
use crate::theme::Theme;
use crate::view::{ProblemView, week_options};

/// Minimum width for the problem list
const LIST_MIN_WIDTH: u16 = 40;

/// Draw the dashboard: stats, breakdown, controls, list, notes, command line
pub fn draw<S: KeyValueStore>(frame: &mut Frame, tracker: &mut Tracker<S>, theme: &Theme) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let problems = tracker.progress.problems();
    let stats = ProblemStats::compute(problems);
    let weeks = week_options(problems);

    dashboard::draw_cards(frame, rows[0], &stats, theme);
    dashboard::draw_breakdown(frame, rows[1], &stats, theme);
    problem_list::draw_controls(frame, rows[2], &tracker.state.query, &weeks, theme);

    let body = create_body_layout(rows[3]);
    let view = ProblemView::build(&tracker.progress, &tracker.state.query);
    let selected = view.flattened().get(tracker.state.list.selected_index).copied();

    problem_list::draw(
        frame,
        body[0],
        &view,
        &mut tracker.state.list,
        tracker.notes.notes(),
        tracker.state.query.week,
        theme,
    );

    let note = selected.and_then(|p| tracker.notes.note(&p.title));
    notes_panel::draw(frame, body[1], selected, note, tracker.state.editing_note.is_some(), theme);

    command_line::draw(frame, rows[4], &tracker.state.command_line, theme);
}

/// Split the body into the problem list and the notes panel
fn create_body_layout(area: Rect) -> Vec<Rect> {
    let notes_width = area.width / 3;
    let constraints = if area.width.saturating_sub(notes_width) < LIST_MIN_WIDTH {
        [Constraint::Min(0), Constraint::Length(0)]
    } else {
        [Constraint::Min(LIST_MIN_WIDTH), Constraint::Length(notes_width)]
    };

    Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_body_shows_notes_panel() {
        let chunks = create_body_layout(Rect::new(0, 0, 120, 30));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].width, 40);
    }

    #[test]
    fn narrow_body_hides_notes_panel() {
        let chunks = create_body_layout(Rect::new(0, 0, 50, 30));
        assert_eq!(chunks[1].width, 0);
    }
}
