//! Generated card list panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use cardgen_core::GeneratedCard;

use crate::scroll::ScrollState;
use crate::styles::ColorTheme;

/// One display row: `#01 • 4111 1111 1111 111 • 05/26 • 123 • Visa`.
fn card_line<'a>(card: &GeneratedCard, theme: &ColorTheme) -> Line<'a> {
    let sep = || Span::styled(" • ", theme.muted_style());
    Line::from(vec![
        Span::styled(format!("#{:02}", card.index()), theme.muted_style()),
        sep(),
        Span::styled(card.formatted_number().to_owned(), theme.header_style()),
        sep(),
        Span::styled(card.expiry().to_string(), theme.text_style()),
        sep(),
        Span::styled(card.cvv().to_owned(), theme.text_style()),
        sep(),
        Span::styled(card.card_type().to_string(), theme.success_style()),
    ])
}

/// Render the card list, or a hint when it is empty.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    cards: &[GeneratedCard],
    scroll: &ScrollState,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Cards ({}) ", cards.len()))
        .border_style(theme.border_style());

    if cards.is_empty() {
        let hint = Paragraph::new(Line::styled(
            "Enter a BIN and press Enter to generate",
            theme.muted_style(),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2) as usize;
    let start = scroll.visible_start(cards.len(), visible_height);
    let items: Vec<ListItem> = cards
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|card| ListItem::new(card_line(card, theme)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgen_core::{CardBrand, Expiry};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample(n: u32) -> Vec<GeneratedCard> {
        (1..=n)
            .map(|i| {
                GeneratedCard::new(
                    i,
                    "411111000000008".into(),
                    Expiry::new(5, 26).unwrap(),
                    "123".into(),
                    CardBrand::Visa,
                )
            })
            .collect()
    }

    fn draw(cards: &[GeneratedCard], scroll: &ScrollState) -> Vec<String> {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let completed = terminal
            .draw(|frame| {
                let area = frame.area();
                render_cards(frame, area, cards, scroll, &ColorTheme::default());
            })
            .unwrap();
        (0..completed.area.height)
            .map(|y| {
                (0..completed.area.width)
                    .map(|x| completed.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_list_shows_hint() {
        let rows = draw(&[], &ScrollState::top());
        assert!(rows[1].contains("press Enter"));
    }

    #[test]
    fn rows_use_display_format() {
        let rows = draw(&sample(2), &ScrollState::top());
        assert!(rows[0].contains("Cards (2)"));
        assert!(rows[1].contains("#01 • 4111 1100 0000 008 • 05/26 • 123 • Visa"));
        assert!(rows[2].contains("#02"));
    }

    #[test]
    fn scrolled_list_starts_at_offset() {
        let mut scroll = ScrollState::top();
        scroll.scroll_down(10, 4);
        scroll.scroll_down(10, 4);
        let rows = draw(&sample(10), &scroll);
        assert!(rows[1].contains("#03"));
    }
}
