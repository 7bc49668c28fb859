//! Batch progress gauge.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the progress gauge for the running (or last) batch.
pub fn render_progress(
    frame: &mut Frame,
    area: Rect,
    current: u32,
    total: u32,
    progress: f64,
    theme: &ColorTheme,
) {
    let label = if total == 0 {
        "idle".to_string()
    } else {
        format!("{current}/{total} cards")
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(theme.success_style())
        .label(label)
        .ratio(progress.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}
