//! Statistics derived from the progress store
//!
//! Everything here is a pure function of a problem slice. Nothing is cached
//! or persisted; callers recompute on every render.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;

use crate::catalog::{Difficulty, Problem};

/// Completion counts for one difficulty bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyProgress {
    pub total: usize,
    pub completed: usize,
}

impl DifficultyProgress {
    /// Rounded completion percentage, 0 for an empty bucket
    pub fn percent(&self) -> u32 {
        rounded_percent(self.completed, self.total)
    }

    /// Problems left in this bucket
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Completion fraction in `0.0..=1.0`, for gauges
    pub fn ratio(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.completed as f64 / self.total as f64 }
    }
}

/// Aggregate statistics over the whole store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProblemStats {
    pub total: usize,
    pub completed: usize,
    /// Rounded completion percentage, 0 when there are no problems
    pub progress: u32,
    pub easy: DifficultyProgress,
    pub medium: DifficultyProgress,
    pub hard: DifficultyProgress,
    /// Longest run of consecutive days with at least one completion
    pub streak: u32,
}

impl ProblemStats {
    /// Compute statistics using the local timezone for calendar dates
    pub fn compute(problems: &[Problem]) -> Self {
        Self::compute_in(problems, &Local)
    }

    /// Compute statistics, bucketing completion dates in `tz`
    pub fn compute_in<Tz: TimeZone>(problems: &[Problem], tz: &Tz) -> Self {
        let mut stats = Self { total: problems.len(), ..Default::default() };

        for problem in problems {
            let bucket = stats.bucket_mut(problem.difficulty);
            bucket.total += 1;
            if problem.completed {
                bucket.completed += 1;
                stats.completed += 1;
            }
        }

        stats.progress = rounded_percent(stats.completed, stats.total);
        stats.streak = longest_streak(problems, tz);
        stats
    }

    /// Counts for one difficulty bucket
    pub fn bucket(&self, difficulty: Difficulty) -> &DifficultyProgress {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyProgress {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// `round(100 * part / whole)` with halves rounded up, 0 when `whole` is 0
fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 200 + whole) / (whole * 2)) as u32
}

/// Distinct calendar dates (in `tz`) on which something was completed, ascending
pub fn completion_dates<Tz: TimeZone>(problems: &[Problem], tz: &Tz) -> BTreeSet<NaiveDate> {
    problems
        .iter()
        .filter(|p| p.completed)
        .filter_map(|p| p.completed_date)
        .map(|date| date.with_timezone(tz).date_naive())
        .collect()
}

/// Longest run of consecutive calendar days containing a completion
///
/// This is the longest historical run, not the run ending today.
pub fn longest_streak<Tz: TimeZone>(problems: &[Problem], tz: &Tz) -> u32 {
    let dates = completion_dates(problems, tz);

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in dates {
        current = match previous {
            Some(prev) if (date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn problem(title: &str, difficulty: Difficulty) -> Problem {
        Problem::new(title, 1, 1, "Theme", difficulty, "Technique")
    }

    fn completed_on(title: &str, at: DateTime<Utc>) -> Problem {
        let mut p = problem(title, Difficulty::Medium);
        p.set_completed(true, at);
        p
    }

    fn utc(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn empty_store_has_zero_progress() {
        let stats = ProblemStats::compute_in(&[], &Utc);
        assert_eq!(stats, ProblemStats::default());
    }

    #[test]
    fn counts_per_difficulty() {
        let mut problems = vec![
            problem("a", Difficulty::Easy),
            problem("b", Difficulty::Easy),
            problem("c", Difficulty::Medium),
            problem("d", Difficulty::Hard),
        ];
        problems[0].set_completed(true, utc(1, 1, 9));
        problems[3].set_completed(true, utc(1, 1, 10));

        let stats = ProblemStats::compute_in(&problems, &Utc);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.progress, 50);
        assert_eq!(stats.easy, DifficultyProgress { total: 2, completed: 1 });
        assert_eq!(stats.medium, DifficultyProgress { total: 1, completed: 0 });
        assert_eq!(stats.hard, DifficultyProgress { total: 1, completed: 1 });
    }

    #[test]
    fn progress_rounds_half_up() {
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(0, 0), 0);
    }

    #[test]
    fn empty_bucket_percent_is_zero() {
        let bucket = DifficultyProgress::default();
        assert_eq!(bucket.percent(), 0);
        assert_eq!(bucket.ratio(), 0.0);
        assert_eq!(bucket.remaining(), 0);
    }

    #[test]
    fn streak_is_zero_without_completions() {
        let problems = vec![problem("a", Difficulty::Easy)];
        assert_eq!(longest_streak(&problems, &Utc), 0);
    }

    #[test]
    fn single_date_streak_is_one() {
        let problems = vec![completed_on("a", utc(1, 1, 8)), completed_on("b", utc(1, 1, 20))];
        assert_eq!(longest_streak(&problems, &Utc), 1);
    }

    #[test]
    fn streak_skips_gap_and_keeps_longest_run() {
        let problems = vec![
            completed_on("a", utc(1, 1, 9)),
            completed_on("b", utc(1, 2, 9)),
            completed_on("c", utc(1, 3, 9)),
            completed_on("d", utc(1, 5, 9)),
        ];
        assert_eq!(longest_streak(&problems, &Utc), 3);
    }

    #[test]
    fn streak_counts_days_not_items() {
        let problems = vec![
            completed_on("a", utc(1, 1, 9)),
            completed_on("b", utc(1, 1, 18)),
            completed_on("c", utc(1, 1, 23)),
        ];
        assert_eq!(longest_streak(&problems, &Utc), 1);
    }

    #[test]
    fn streak_order_independent() {
        let problems = vec![
            completed_on("d", utc(1, 5, 9)),
            completed_on("a", utc(1, 1, 9)),
            completed_on("c", utc(1, 3, 9)),
            completed_on("b", utc(1, 2, 9)),
        ];
        assert_eq!(longest_streak(&problems, &Utc), 3);
    }

    #[test]
    fn streak_spans_month_boundary() {
        let problems = vec![completed_on("a", utc(1, 31, 9)), completed_on("b", utc(2, 1, 9))];
        assert_eq!(longest_streak(&problems, &Utc), 2);
    }

    #[test]
    fn streak_uses_timezone_for_calendar_date() {
        // 23:00 UTC on Jan 1 is already Jan 2 at UTC+2
        let problems = vec![completed_on("a", utc(1, 1, 23)), completed_on("b", utc(1, 2, 12))];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(longest_streak(&problems, &Utc), 2);
        assert_eq!(longest_streak(&problems, &plus_two), 1);
    }

    #[test]
    fn completed_flag_without_date_is_ignored() {
        let mut p = problem("a", Difficulty::Easy);
        p.completed = true;

        let stats = ProblemStats::compute_in(&[p], &Utc);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.streak, 0);
    }
}
