//! Plain-text rendering for the command line interface
//!
//! Each report is a `Display` type; the `format_*` helpers render them to
//! strings for printing.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Local;

use crate::catalog::{Difficulty, Problem};
use crate::stats::ProblemStats;
use crate::view::ProblemView;

/// Summary block printed by `stats`
pub struct StatsReport<'a>(pub &'a ProblemStats);

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, "Total problems: {}", stats.total)?;
        writeln!(f, "Completed:      {} ({}%)", stats.completed, stats.progress)?;
        writeln!(f, "Streak:         {} days", stats.streak)?;
        writeln!(f)?;
        for difficulty in Difficulty::ALL {
            let bucket = stats.bucket(difficulty);
            writeln!(
                f,
                "{:<7} {:>3}/{:<3} {:>3}%  {} remaining",
                difficulty.as_str(),
                bucket.completed,
                bucket.total,
                bucket.percent(),
                bucket.remaining()
            )?;
        }
        Ok(())
    }
}

/// Grouped problem list printed by `list`
pub struct ViewReport<'a> {
    pub view: &'a ProblemView<'a>,
    pub notes: &'a BTreeMap<String, String>,
}

impl fmt::Display for ViewReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = match self.view {
            ProblemView::NotLoaded => return writeln!(f, "Progress not loaded"),
            ProblemView::NoResults => return writeln!(f, "No problems match the current filter"),
            ProblemView::Days(groups) => groups,
        };

        for group in groups {
            writeln!(f, "{} ({})", group.label(), group.subtitle())?;
            for problem in &group.problems {
                let mark = if problem.completed { "x" } else { " " };
                let has_note = self.notes.get(&problem.title).is_some_and(|n| !n.is_empty());
                write!(f, "  [{mark}] {} [{}] {}", problem.title, problem.difficulty, problem.technique)?;
                writeln!(f, "{}", if has_note { " (note)" } else { "" })?;
            }
        }
        Ok(())
    }
}

/// Detail block printed by `show`
pub struct ProblemReport<'a> {
    pub problem: &'a Problem,
    pub note: Option<&'a str>,
}

impl fmt::Display for ProblemReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = self.problem;
        writeln!(f, "{}", problem.title)?;
        writeln!(f, "  Week {} · Day {} · {}", problem.week, problem.day, problem.difficulty)?;
        writeln!(f, "  {} · {}", problem.theme, problem.technique)?;
        if let Some(reference) = &problem.external_reference {
            writeln!(f, "  LeetCode {reference}")?;
        }
        writeln!(f, "  Solve: {}", problem.leetcode_url())?;
        match problem.completed_date {
            Some(date) => {
                let local = date.with_timezone(&Local);
                writeln!(f, "  Completed {}", local.format("%Y-%m-%d %H:%M"))?;
            }
            None => writeln!(f, "  Pending")?,
        }
        if let Some(note) = self.note.filter(|n| !n.is_empty()) {
            writeln!(f, "  Note: {note}")?;
        }
        Ok(())
    }
}

pub fn format_stats(stats: &ProblemStats) -> String {
    StatsReport(stats).to_string()
}

pub fn format_view(view: &ProblemView<'_>, notes: &BTreeMap<String, String>) -> String {
    ViewReport { view, notes }.to_string()
}

pub fn format_problem(problem: &Problem, note: Option<&str>) -> String {
    ProblemReport { problem, note }.to_string()
}

/// Week selector options printed by `weeks`
pub fn format_weeks(weeks: &[u32]) -> String {
    weeks.iter().map(|w| format!("Week {w}\n")).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::stats::DifficultyProgress;
    use crate::view::ViewQuery;

    #[test]
    fn stats_report_lists_every_bucket() {
        let stats = ProblemStats {
            total: 4,
            completed: 1,
            progress: 25,
            easy: DifficultyProgress { total: 2, completed: 1 },
            medium: DifficultyProgress { total: 2, completed: 0 },
            hard: DifficultyProgress::default(),
            streak: 1,
        };

        let report = format_stats(&stats);

        assert!(report.contains("Completed:      1 (25%)"));
        assert!(report.contains("Hard      0/0     0%  0 remaining"));
    }

    #[test]
    fn view_report_marks_completed_and_notes() {
        let mut problems = vec![
            Problem::new("Two Sum", 1, 1, "Arrays", Difficulty::Easy, "Hash Map"),
            Problem::new("Valid Anagram", 1, 1, "Arrays", Difficulty::Easy, "Counting"),
        ];
        problems[0].completed = true;
        let notes = BTreeMap::from([("Valid Anagram".to_string(), "sort both".to_string())]);

        let view = ProblemView::from_problems(&problems, &ViewQuery::default());

        assert_eq!(
            format_view(&view, &notes),
            "Day 1 (Week 1 • Arrays)\n  [x] Two Sum [Easy] Hash Map\n  [ ] Valid Anagram [Easy] Counting (note)\n"
        );
    }

    #[test]
    fn problem_report_links_to_leetcode() {
        let problem = Problem::new("Valid Anagram", 1, 1, "Arrays", Difficulty::Easy, "Counting");
        let report = format_problem(&problem, Some("sort both"));

        assert!(report.contains("  Solve: https://leetcode.com/problems/valid-anagram/\n"));
        assert!(report.contains("  Pending\n"));
        assert!(report.contains("  Note: sort both\n"));
    }

    #[test]
    fn empty_views_have_messages() {
        let notes = BTreeMap::new();
        assert_eq!(format_view(&ProblemView::NoResults, &notes), "No problems match the current filter\n");
        assert_eq!(format_view(&ProblemView::NotLoaded, &notes), "Progress not loaded\n");
    }

    #[test]
    fn weeks_report() {
        assert_eq!(format_weeks(&[1, 2]), "Week 1\nWeek 2\n");
    }
}
