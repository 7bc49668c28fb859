//! BIN and count input fields.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use cardgen_core::constants::{BIN_LENGTH, MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use cardgen_core::{CardError, GenerationRequest};

use crate::styles::ColorTheme;

const COUNT_MAX_DIGITS: usize = 2;

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bin,
    Count,
}

/// Editable form state.
#[derive(Debug, Clone)]
pub struct InputForm {
    pub bin: String,
    pub count: String,
    pub focus: Field,
}

impl InputForm {
    #[must_use]
    pub fn new(bin: &str, count: u32) -> Self {
        Self {
            bin: bin.chars().filter(char::is_ascii_digit).take(BIN_LENGTH).collect(),
            count: count.to_string(),
            focus: Field::Bin,
        }
    }

    /// Move focus to the other field.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Field::Bin => Field::Count,
            Field::Count => Field::Bin,
        };
    }

    /// Append a digit to the focused field; input beyond the field width is dropped.
    pub fn push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let (value, max) = match self.focus {
            Field::Bin => (&mut self.bin, BIN_LENGTH),
            Field::Count => (&mut self.count, COUNT_MAX_DIGITS),
        };
        if value.len() < max {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Bin => self.bin.pop(),
            Field::Count => self.count.pop(),
        };
    }

    /// Validate both fields into a request.
    pub fn to_request(&self) -> Result<GenerationRequest, CardError> {
        let count = self.count.parse::<i64>().unwrap_or(0);
        GenerationRequest::new(&self.bin, count)
    }
}

/// Message shown for a rejected form, worded for someone typing into it.
#[must_use]
pub fn validation_message(err: &CardError) -> String {
    match err {
        CardError::InvalidCount(n) if *n < i64::from(MIN_BATCH_SIZE) => {
            format!("Amount must be at least {MIN_BATCH_SIZE}")
        }
        CardError::InvalidCount(_) => format!("Amount must be {MAX_BATCH_SIZE} or less"),
        other => other.to_string(),
    }
}

/// Render the two input fields side by side.
pub fn render_form(frame: &mut Frame, area: Rect, form: &InputForm, theme: &ColorTheme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let fields = [
        (Field::Bin, " BIN ", form.bin.as_str()),
        (Field::Count, " Amount (1-50) ", form.count.as_str()),
    ];
    for ((field, title, value), rect) in fields.into_iter().zip(chunks.iter()) {
        let focused = form.focus == field;
        let border = if focused {
            theme.focused_border_style()
        } else {
            theme.border_style()
        };
        let mut spans = vec![Span::styled(value.to_owned(), theme.text_style())];
        if focused {
            spans.push(Span::styled("_", theme.muted_style()));
        }
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border),
        );
        frame.render_widget(paragraph, *rect);
    }
}
