//! Scrollable log panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::scroll::ScrollState;
use crate::styles::ColorTheme;

/// Render the log panel.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll: &ScrollState,
    theme: &ColorTheme,
) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let total = logs.len();
    let start = scroll.visible_start(total, visible_height);

    let items: Vec<ListItem> = logs
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|log| ListItem::new(Line::raw(log.as_str())).style(theme.log_style(log)))
        .collect();

    let title = if total > visible_height && !scroll.follow {
        format!(" Logs ({}/{total}) ", start + 1)
    } else {
        " Logs ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );
    frame.render_widget(list, area);
}
