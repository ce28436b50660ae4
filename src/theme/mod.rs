//! Dashboard colors
//!
//! A theme names colors by the role they play on the dashboard rather than
//! by palette position, so a custom theme in the config only has to fill
//! in roles.

mod tokyo_night;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;

/// Colors for every dashboard role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub border_active: Color,

    // Text
    pub text: Color,
    pub text_bright: Color,
    pub text_dim: Color,

    // Selection, week selector and filter
    pub accent: Color,
    pub highlight: Color,

    // Difficulty badges and gauges
    pub easy: Color,
    pub medium: Color,
    pub hard: Color,

    // Status
    pub done: Color,
    pub streak: Color,
    pub note: Color,
    pub info: Color,
    pub error: Color,

    pub cursor: Color,
}

impl Theme {
    /// Color used for a difficulty badge
    pub fn difficulty_color(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}
