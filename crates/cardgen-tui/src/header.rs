//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Render the title and current status.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    kind: StatusKind,
    theme: &ColorTheme,
) {
    let status_style = match kind {
        StatusKind::Info => theme.text_style(),
        StatusKind::Success => theme.success_style(),
        StatusKind::Error => theme.error_style(),
    };
    let text = vec![Line::from(vec![
        Span::styled("cardgen", theme.header_style()),
        Span::raw(" | "),
        Span::styled(status.to_owned(), status_style),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Test Card Generator ");

    frame.render_widget(Paragraph::new(text).block(block), area);
}
