//! TUI styles and color theme.

use ratatui::style::{Color, Modifier, Style};

use coinpane_core::format::Tone;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub positive: Color,
    pub negative: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
    pub flag: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            focus: Color::Yellow,
            flag: Color::Magenta,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style of a table or log cell by its tone.
    #[must_use]
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Neutral => self.text_style(),
            Tone::Positive => Style::default().fg(self.positive),
            Tone::Negative => Style::default().fg(self.negative),
        }
    }

    /// Border of a panel, highlighted when it has focus.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Row under the cursor. Only reversed when its panel has focus.
    #[must_use]
    pub fn cursor_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        }
    }

    #[must_use]
    pub fn flag_style(&self) -> Style {
        Style::default().fg(self.flag)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_map_to_green_and_red() {
        let theme = ColorTheme::default();
        assert_eq!(theme.tone_style(Tone::Positive).fg, Some(Color::Green));
        assert_eq!(theme.tone_style(Tone::Negative).fg, Some(Color::Red));
        assert_eq!(theme.tone_style(Tone::Neutral).fg, Some(Color::White));
    }

    #[test]
    fn focused_border_differs() {
        let theme = ColorTheme::default();
        assert_ne!(theme.border_style(true), theme.border_style(false));
    }
}
