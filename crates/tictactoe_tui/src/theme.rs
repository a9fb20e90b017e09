//! Color themes for the terminal app.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Color theme, toggled at runtime with `t`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light marks on the terminal's dark background.
    Dark,
    /// Dark marks on a white background.
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    /// Switches to the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Base style painted across the whole frame.
    pub fn base_style(&self) -> Style {
        match self {
            Theme::Dark => Style::default(),
            Theme::Light => Style::default().bg(Color::White).fg(Color::Black),
        }
    }

    /// Style for titles.
    pub fn title_style(&self) -> Style {
        let color = match self {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for X marks.
    pub fn x_style(&self) -> Style {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    }

    /// Style for O marks.
    pub fn o_style(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Style for the digit hints in empty squares.
    pub fn hint_style(&self) -> Style {
        let color = match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        };
        Style::default().fg(color)
    }

    /// Style for borders and separators.
    pub fn border_style(&self) -> Style {
        let color = match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Black,
        };
        Style::default().fg(color)
    }

    /// Style for the status line.
    pub fn status_style(&self) -> Style {
        let color = match self {
            Theme::Dark => Color::Yellow,
            Theme::Light => Color::Blue,
        };
        Style::default().fg(color)
    }

    /// Style for the square under the cursor.
    pub fn cursor_style(&self) -> Style {
        match self {
            Theme::Dark => Style::default().bg(Color::White).fg(Color::Black),
            Theme::Light => Style::default().bg(Color::Black).fg(Color::White),
        }
    }

    /// Style for the end-of-game overlay headline.
    pub fn overlay_style(&self) -> Style {
        self.title_style()
    }

    /// Style for the celebratory quote.
    pub fn quote_style(&self) -> Style {
        self.hint_style().add_modifier(Modifier::ITALIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_parses_lowercase() {
        assert_eq!(Theme::from_str("dark"), Ok(Theme::Dark));
        assert_eq!(Theme::from_str("light"), Ok(Theme::Light));
        assert!(Theme::from_str("solarized").is_err());
    }
}
