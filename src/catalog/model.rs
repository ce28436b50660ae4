//! Problem data model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty bucket of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All buckets, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Reference id into an external problem archive (numeric or free-form)
///
/// Any JSON number is accepted, so a stored record with a negative or
/// fractional id still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalReference {
    Number(serde_json::Number),
    Text(String),
}

impl From<u64> for ExternalReference {
    fn from(id: u64) -> Self {
        ExternalReference::Number(id.into())
    }
}

impl fmt::Display for ExternalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalReference::Number(n) => write!(f, "#{n}"),
            ExternalReference::Text(s) => write!(f, "#{s}"),
        }
    }
}

/// A catalog problem together with its completion state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Unique title, used as the key for progress and notes
    pub title: String,

    /// Curriculum day number
    pub day: u32,

    /// Curriculum week number
    pub week: u32,

    /// Topical grouping label
    pub theme: String,

    pub difficulty: Difficulty,

    /// External archive id
    #[serde(default, rename = "leetcode", skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReference>,

    /// Algorithmic technique label
    pub technique: String,

    #[serde(default)]
    pub completed: bool,

    /// Set exactly when `completed` is true
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
}

impl Problem {
    /// Create a pending problem
    pub fn new(
        title: impl Into<String>,
        day: u32,
        week: u32,
        theme: impl Into<String>,
        difficulty: Difficulty,
        technique: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            day,
            week,
            theme: theme.into(),
            difficulty,
            external_reference: None,
            technique: technique.into(),
            completed: false,
            completed_date: None,
        }
    }

    /// Attach an external archive reference
    pub fn with_reference(mut self, reference: ExternalReference) -> Self {
        self.external_reference = Some(reference);
        self
    }

    /// Mark complete at `now`, or clear completion
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_date = if completed { Some(now) } else { None };
    }

    /// LeetCode problem page derived from the title
    pub fn leetcode_url(&self) -> String {
        format!("https://leetcode.com/problems/{}/", self.title.to_lowercase().replace(' ', "-"))
    }

    /// Case-insensitive match of an already lower-cased needle against title, theme or technique
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.theme.to_lowercase().contains(needle_lower)
            || self.technique.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn problem_serializes_record_field_names() {
        let problem = Problem::new("Two Sum", 1, 1, "Arrays", Difficulty::Easy, "Hash Map")
            .with_reference(1.into());
        let json = serde_json::to_string(&problem).unwrap();

        assert!(json.contains("\"leetcode\":1"));
        assert!(json.contains("\"completedDate\":null"));
        assert!(json.contains("\"difficulty\":\"Easy\""));
    }

    #[test]
    fn problem_deserializes_string_reference() {
        let json = r#"{
            "title": "Meeting Rooms II",
            "day": 58,
            "week": 12,
            "theme": "Greedy & Intervals",
            "difficulty": "Medium",
            "leetcode": "253",
            "technique": "Sweep Line"
        }"#;
        let problem: Problem = serde_json::from_str(json).unwrap();

        assert_eq!(problem.external_reference, Some(ExternalReference::Text("253".into())));
        assert!(!problem.completed);
        assert!(problem.completed_date.is_none());
    }

    #[test]
    fn negative_and_fractional_references_round_trip() {
        let json = r#"[
            {"title":"A","day":1,"week":1,"theme":"t","difficulty":"Easy","leetcode":-1,"technique":"x"},
            {"title":"B","day":1,"week":1,"theme":"t","difficulty":"Easy","leetcode":2.5,"technique":"x"}
        ]"#;
        let problems: Vec<Problem> = serde_json::from_str(json).unwrap();

        assert_eq!(problems[0].external_reference.as_ref().unwrap().to_string(), "#-1");
        assert_eq!(problems[1].external_reference.as_ref().unwrap().to_string(), "#2.5");

        let out = serde_json::to_string(&problems).unwrap();
        assert!(out.contains("\"leetcode\":-1"));
        assert!(out.contains("\"leetcode\":2.5"));
    }

    #[test]
    fn leetcode_url_slugs_title() {
        let problem = Problem::new("Two Sum", 1, 1, "Arrays", Difficulty::Easy, "Hash Map");
        assert_eq!(problem.leetcode_url(), "https://leetcode.com/problems/two-sum/");

        let problem = Problem::new("Meeting Rooms II", 58, 12, "Intervals", Difficulty::Medium, "Sweep");
        assert_eq!(problem.leetcode_url(), "https://leetcode.com/problems/meeting-rooms-ii/");
    }

    #[test]
    fn set_completed_keeps_date_in_step() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut problem = Problem::new("Two Sum", 1, 1, "Arrays", Difficulty::Easy, "Hash Map");

        problem.set_completed(true, now);
        assert_eq!(problem.completed_date, Some(now));

        problem.set_completed(false, now);
        assert!(problem.completed_date.is_none());
    }

    #[test]
    fn search_covers_title_theme_and_technique() {
        let problem =
            Problem::new("Daily Temperatures", 16, 4, "Stack", Difficulty::Medium, "Monotonic Stack");
        assert!(problem.matches_search("daily"));
        assert!(problem.matches_search("stack"));
        assert!(problem.matches_search("monotonic"));
        assert!(!problem.matches_search("heap"));
    }
}
