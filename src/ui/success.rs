//! Submitted data screen

use crate::app::App;
use crate::state::{ResultContent, View, GO_BACK_LABEL, NO_DATA_MESSAGE};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width reserved for the label column
const LABEL_WIDTH: usize = 14;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.result_view();
    let accent = if view.has_data() {
        Color::Green
    } else {
        Color::Yellow
    };
    let block = Block::default()
        .title(format!(" {} ", View::Success.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view.content() {
        ResultContent::NoData => draw_no_data(frame, inner),
        ResultContent::Entries(entries) => {
            let lines: Vec<Line> = entries
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<LABEL_WIDTH$}", capitalize_words(&entry.label)),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(": "),
                        Span::raw(entry.value.clone()),
                    ])
                })
                .collect();

            let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, inner);
        }
    }
}

fn draw_no_data(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Go back
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(NO_DATA_MESSAGE).style(Style::default().fg(Color::Yellow)),
        chunks[0],
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[1]);
    render_button(frame, button_area[0], GO_BACK_LABEL, true, true, Color::Cyan);
}

/// Upper-case the first letter of every word ("phone Number" -> "Phone Number")
fn capitalize_words(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
