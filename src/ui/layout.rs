//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main content and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(app.state.current_view());
    spans.push(Span::styled(hints, Style::default().fg(Color::Black)));

    if app.state.current_view() == View::Registration {
        let open = app.form.errors().failing().count();
        if open > 0 {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{open} to fix"),
                Style::default().fg(Color::Red),
            ));
        }
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Registration => format!(
            "Tab:next  {SUBMIT_SHORTCUT}:submit  {TOGGLE_PASSWORD_SHORTCUT}:password  Esc:quit"
        ),
        View::Success => "Enter/b:go back  q:quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_view_hints() {
        assert!(get_view_hints(View::Registration).contains(SUBMIT_SHORTCUT));
        assert!(get_view_hints(View::Success).contains("go back"));
    }
}
