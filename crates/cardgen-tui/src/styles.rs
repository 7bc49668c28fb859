//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
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

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Border of the input field that has focus.
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for a log line, keyed off its level prefix.
    #[must_use]
    pub fn log_style(&self, line: &str) -> Style {
        if line.starts_with("[ERROR]") {
            self.error_style()
        } else if line.starts_with("[WARN]") {
            self.warning_style()
        } else {
            Style::default()
        }
    }
}
