//! Filtering and grouping of the problem list
//!
//! Views are read-only projections of the progress store. Statistics are
//! always computed from the full store, never from a view.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{Difficulty, Problem};
use crate::progress::ProgressStore;
use crate::storage::KeyValueStore;

/// Status or difficulty filter applied before search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
    Difficulty(Difficulty),
}

impl StatusFilter {
    /// Every filter, in selector order
    pub const ALL_FILTERS: [StatusFilter; 6] = [
        StatusFilter::All,
        StatusFilter::Completed,
        StatusFilter::Pending,
        StatusFilter::Difficulty(Difficulty::Easy),
        StatusFilter::Difficulty(Difficulty::Medium),
        StatusFilter::Difficulty(Difficulty::Hard),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
            StatusFilter::Difficulty(Difficulty::Easy) => "easy",
            StatusFilter::Difficulty(Difficulty::Medium) => "medium",
            StatusFilter::Difficulty(Difficulty::Hard) => "hard",
        }
    }

    /// The next filter in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL_FILTERS.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL_FILTERS[(idx + 1) % Self::ALL_FILTERS.len()]
    }

    /// Whether a problem passes this filter
    pub fn matches(&self, problem: &Problem) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => problem.completed,
            StatusFilter::Pending => !problem.completed,
            StatusFilter::Difficulty(difficulty) => problem.difficulty == *difficulty,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized filter name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected all, completed, pending, easy, medium or hard)")]
pub struct ParseFilterError(pub String);

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL_FILTERS
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// Everything that determines which problems are shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: StatusFilter,
    pub search: String,
    pub week: u32,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self { filter: StatusFilter::All, search: String::new(), week: 1 }
    }
}

/// Problems for one curriculum day, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub day: u32,
    pub problems: Vec<&'a Problem>,
}

impl DayGroup<'_> {
    /// Header label, e.g. "Day 3"
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }

    /// Week and theme of the day, e.g. "Week 2 • Two Pointers"
    pub fn subtitle(&self) -> String {
        match self.problems.first() {
            Some(first) => format!("Week {} • {}", first.week, first.theme),
            None => String::new(),
        }
    }
}

/// Result of projecting the store through a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemView<'a> {
    /// The store has not been initialized yet
    NotLoaded,
    /// The store is loaded but nothing matches
    NoResults,
    /// Matching problems for the active week, grouped by day
    Days(Vec<DayGroup<'a>>),
}

impl<'a> ProblemView<'a> {
    /// Project `store` through `query`
    pub fn build<S: KeyValueStore>(store: &'a ProgressStore<S>, query: &ViewQuery) -> Self {
        if !store.is_initialized() {
            return ProblemView::NotLoaded;
        }
        Self::from_problems(store.problems(), query)
    }

    /// Project an already loaded problem slice through `query`
    pub fn from_problems(problems: &'a [Problem], query: &ViewQuery) -> Self {
        let filtered = filter_problems(problems, query.filter, &query.search);
        let groups = group_by_day(filtered, query.week);
        if groups.is_empty() { ProblemView::NoResults } else { ProblemView::Days(groups) }
    }

    /// Groups to display (empty unless `Days`)
    pub fn groups(&self) -> &[DayGroup<'a>] {
        match self {
            ProblemView::Days(groups) => groups,
            _ => &[],
        }
    }

    /// Problems in display order
    pub fn flattened(&self) -> Vec<&'a Problem> {
        self.groups().iter().flat_map(|g| g.problems.iter().copied()).collect()
    }
}

/// Problems passing `filter` whose title, theme or technique contains `search`
pub fn filter_problems<'a>(
    problems: &'a [Problem],
    filter: StatusFilter,
    search: &str,
) -> Vec<&'a Problem> {
    let needle = search.to_lowercase();
    problems.iter().filter(|p| filter.matches(p) && p.matches_search(&needle)).collect()
}

/// Keep problems from `week` and group them by day in first-seen order
pub fn group_by_day<'a, I>(problems: I, week: u32) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a Problem>,
{
    let mut groups: Vec<DayGroup<'a>> = Vec::new();

    for problem in problems.into_iter().filter(|p| p.week == week) {
        match groups.iter_mut().find(|g| g.day == problem.day) {
            Some(group) => group.problems.push(problem),
            None => groups.push(DayGroup { day: problem.day, problems: vec![problem] }),
        }
    }

    groups
}

/// Distinct weeks across the whole store, in first-seen order
pub fn week_options(problems: &[Problem]) -> Vec<u32> {
    let mut weeks = Vec::new();
    for problem in problems {
        if !weeks.contains(&problem.week) {
            weeks.push(problem.week);
        }
    }
    weeks
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryStore;

    fn catalog() -> Vec<Problem> {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut problems = vec![
            Problem::new("Two Sum", 1, 1, "Arrays", Difficulty::Easy, "Hash Map"),
            Problem::new("Valid Parentheses", 2, 1, "Stack", Difficulty::Easy, "Stack"),
            Problem::new("Daily Temperatures", 6, 2, "Monotonic", Difficulty::Medium, "Monotonic Stack"),
            Problem::new("Trapping Rain Water", 6, 2, "Two Pointers", Difficulty::Hard, "Two Pointers"),
            Problem::new("Largest Rectangle", 7, 2, "Histogram", Difficulty::Hard, "Monotonic Stack"),
            Problem::new("Median of Two Arrays", 11, 3, "Binary Search", Difficulty::Hard, "Partition"),
        ];
        problems[3].set_completed(true, now);
        problems
    }

    fn titles(problems: &[&Problem]) -> Vec<String> {
        problems.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn filter_parses_names() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("Pending".parse::<StatusFilter>(), Ok(StatusFilter::Pending));
        assert_eq!("hard".parse::<StatusFilter>(), Ok(StatusFilter::Difficulty(Difficulty::Hard)));
        assert!("done".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_cycles_through_all_values() {
        let mut filter = StatusFilter::All;
        for _ in 0..StatusFilter::ALL_FILTERS.len() {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
        assert_eq!(StatusFilter::Pending.next(), StatusFilter::Difficulty(Difficulty::Easy));
    }

    #[test]
    fn status_filters() {
        let problems = catalog();
        let completed = filter_problems(&problems, StatusFilter::Completed, "");
        let pending = filter_problems(&problems, StatusFilter::Pending, "");

        assert_eq!(titles(&completed), vec!["Trapping Rain Water"]);
        assert_eq!(pending.len(), problems.len() - 1);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let problems = catalog();
        let found = filter_problems(&problems, StatusFilter::All, "STACK");

        assert_eq!(
            titles(&found),
            vec!["Valid Parentheses", "Daily Temperatures", "Largest Rectangle"]
        );
    }

    #[test]
    fn search_and_filter_combine() {
        let problems = catalog();
        let found =
            filter_problems(&problems, StatusFilter::Difficulty(Difficulty::Hard), "stack");
        assert_eq!(titles(&found), vec!["Largest Rectangle"]);
    }

    #[test]
    fn hard_filter_restricted_to_week_groups_by_day() {
        let problems = catalog();
        let query = ViewQuery {
            filter: StatusFilter::Difficulty(Difficulty::Hard),
            search: String::new(),
            week: 2,
        };

        let view = ProblemView::from_problems(&problems, &query);
        let groups = view.groups();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, 6);
        assert_eq!(titles(&groups[0].problems), vec!["Trapping Rain Water"]);
        assert_eq!(groups[1].day, 7);
        assert_eq!(groups[1].label(), "Day 7");
        assert_eq!(groups[0].subtitle(), "Week 2 • Two Pointers");
        assert_eq!(groups[1].subtitle(), "Week 2 • Histogram");
    }

    #[test]
    fn groups_keep_catalog_order_within_day() {
        let problems = catalog();
        let groups = group_by_day(&problems, 2);

        assert_eq!(titles(&groups[0].problems), vec!["Daily Temperatures", "Trapping Rain Water"]);
    }

    #[test]
    fn empty_match_is_no_results() {
        let problems = catalog();
        let query = ViewQuery { search: "nothing matches this".into(), ..Default::default() };

        assert_eq!(ProblemView::from_problems(&problems, &query), ProblemView::NoResults);
    }

    #[test]
    fn uninitialized_store_is_not_loaded() {
        let store = ProgressStore::new(MemoryStore::new());
        assert_eq!(ProblemView::build(&store, &ViewQuery::default()), ProblemView::NotLoaded);
    }

    #[test]
    fn week_options_come_from_whole_store() {
        let problems = catalog();
        assert_eq!(week_options(&problems), vec![1, 2, 3]);
    }

    #[test]
    fn flattened_follows_group_order() {
        let problems = catalog();
        let query = ViewQuery { week: 2, ..Default::default() };
        let view = ProblemView::from_problems(&problems, &query);

        assert_eq!(
            titles(&view.flattened()),
            vec!["Daily Temperatures", "Trapping Rain Water", "Largest Rectangle"]
        );
    }
}
