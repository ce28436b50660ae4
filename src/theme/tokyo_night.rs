//! Tokyo Night palette

use ratatui::style::Color;

use super::Theme;

impl Theme {
    /// The built-in dark theme
    pub fn tokyo_night() -> Self {
        Theme {
            name: "Tokyo Night".to_string(),

            background: Color::Rgb(26, 27, 38), // #1a1b26
            surface: Color::Rgb(36, 40, 59),    // #24283b
            border: Color::Rgb(65, 72, 104),    // #414868
            border_active: Color::Rgb(122, 162, 247),

            text: Color::Rgb(169, 177, 214),        // #a9b1d6
            text_bright: Color::Rgb(192, 202, 245), // #c0caf5
            text_dim: Color::Rgb(86, 95, 137),      // #565f89

            accent: Color::Rgb(122, 162, 247),    // #7aa2f7
            highlight: Color::Rgb(187, 154, 247), // #bb9af7

            easy: Color::Rgb(158, 206, 106),   // green
            medium: Color::Rgb(224, 175, 104), // yellow
            hard: Color::Rgb(247, 118, 142),   // red

            done: Color::Rgb(115, 218, 202),   // #73daca
            streak: Color::Rgb(255, 158, 100), // #ff9e64
            note: Color::Rgb(224, 175, 104),
            info: Color::Rgb(125, 207, 255), // #7dcfff
            error: Color::Rgb(247, 118, 142),

            cursor: Color::Rgb(192, 202, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_color_differs_from_easy_badge() {
        let theme = Theme::tokyo_night();
        assert_ne!(theme.done, theme.easy);
    }

    #[test]
    fn palette_is_true_color() {
        let theme = Theme::tokyo_night();
        for color in [theme.background, theme.accent, theme.streak, theme.hard] {
            assert!(matches!(color, Color::Rgb(_, _, _)));
        }
    }
}
