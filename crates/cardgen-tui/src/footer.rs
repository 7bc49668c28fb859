//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const SHORTCUTS: [(&str, &str); 6] = [
    ("Enter", "generate"),
    ("Tab", "switch field"),
    ("y", "copy all"),
    ("x", "clear"),
    ("Ctrl+C", "cancel"),
    ("q", "quit"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let mut spans = Vec::with_capacity(SHORTCUTS.len() * 2);
    for (i, (key, action)) in SHORTCUTS.iter().enumerate() {
        spans.push(Span::styled(*key, theme.warning_style()));
        let sep = if i + 1 < SHORTCUTS.len() { " | " } else { "" };
        spans.push(Span::raw(format!(": {action}{sep}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let backend = TestBackend::new(120, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, &ColorTheme::default());
            })
            .unwrap();

        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        for (_, action) in SHORTCUTS {
            assert!(content.contains(action), "missing {action}");
        }
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, &ColorTheme::default());
            })
            .unwrap();
    }
}
