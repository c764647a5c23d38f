//! Field rendering utilities for forms

use crate::state::FieldKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one input box
pub struct FieldView<'a> {
    /// Box title
    pub label: &'a str,
    /// Stored value, unmasked
    pub value: &'a str,
    /// Text shown while the value is empty
    pub placeholder: &'a str,
    pub kind: FieldKind,
    /// Validation message drawn on the bottom border ("" for none)
    pub error: &'a str,
    /// Draw the border red without repeating the message
    pub error_border_only: bool,
    pub is_active: bool,
    pub show_secret: bool,
}

/// Text to show for a value of the given kind
pub fn display_value(value: &str, kind: FieldKind, show_secret: bool) -> String {
    match kind {
        FieldKind::Secret if !show_secret => "•".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

/// Draw a single-line form field with its error message
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let has_error = !field.error.is_empty();

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if field.value.is_empty() {
        spans.push(Span::styled(
            field.placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            display_value(field.value, field.kind, field.show_secret),
            value_style,
        ));
    }

    if field.is_active {
        match field.kind {
            FieldKind::Select => {
                spans.insert(0, Span::styled("◀ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
            }
            FieldKind::Text | FieldKind::Secret => {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if has_error && !field.error_border_only {
        block = block.title_bottom(Line::styled(
            format!(" {} ", field.error),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_masked_per_character() {
        assert_eq!(display_value("pässw", FieldKind::Secret, false), "•••••");
    }

    #[test]
    fn test_secret_can_be_revealed() {
        assert_eq!(display_value("secret1", FieldKind::Secret, true), "secret1");
    }

    #[test]
    fn test_text_is_shown_as_is() {
        assert_eq!(display_value("Ann", FieldKind::Text, false), "Ann");
        assert_eq!(display_value("India", FieldKind::Select, false), "India");
    }
}
