//! Registration form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::{Field, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one input box
const FIELD_HEIGHT: u16 = 3;

const LEFT_COLUMN: [Field; 5] = [
    Field::FirstName,
    Field::LastName,
    Field::Username,
    Field::Email,
    Field::Password,
];

const RIGHT_COLUMN: [Field; 4] = [Field::Country, Field::City, Field::Pan, Field::Aadhar];

/// Draw the registration form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", View::Registration.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * 5), // Fields
            Constraint::Length(BUTTON_HEIGHT),    // Submit
            Constraint::Length(1),                // Help text
            Constraint::Min(0),                   // Remaining space
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    draw_column(frame, columns[0], app, &LEFT_COLUMN, false);
    draw_column(frame, columns[1], app, &RIGHT_COLUMN, true);
    draw_submit(frame, rows[1], app);

    let help = Paragraph::new(Line::styled(
        format!(
            "Tab/↑↓:move  ←→:choose  {SUBMIT_SHORTCUT}:submit  {TOGGLE_PASSWORD_SHORTCUT}:show/hide password"
        ),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, rows[2]);
}

/// Draw a column of fields, optionally led by the phone row
fn draw_column(frame: &mut Frame, area: Rect, app: &App, fields: &[Field], with_phone: bool) {
    let slots = fields.len() + usize::from(with_phone);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); slots])
        .split(area);

    let mut chunk_iter = chunks.iter();
    if with_phone {
        if let Some(row) = chunk_iter.next() {
            draw_phone_row(frame, *row, app);
        }
    }
    for (field, chunk) in fields.iter().zip(chunk_iter) {
        draw_form_field(frame, *chunk, app, *field);
    }
}

fn field_view<'a>(app: &'a App, field: Field) -> FieldView<'a> {
    FieldView {
        label: label_for(field, app.state.show_password),
        value: app.form.value(field),
        placeholder: field.placeholder(),
        kind: field.kind(),
        error: app.form.error_for(field),
        error_border_only: false,
        is_active: app.state.focused_field() == Some(field),
        show_secret: app.state.show_password,
    }
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    draw_field(frame, area, field_view(app, field));
}

/// Code and number side by side, sharing one message under the number
fn draw_phone_row(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(area);

    let code = FieldView {
        error_border_only: true,
        ..field_view(app, Field::PhoneCode)
    };
    draw_field(frame, chunks[0], code);
    draw_field(frame, chunks[1], field_view(app, Field::PhoneNumber));
}

fn draw_submit(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Submit",
        app.state.is_submit_focused(),
        app.form.is_valid(),
        Color::Green,
    );
}

/// Box title for `field`; the password box advertises its toggle
fn label_for(field: Field, show_password: bool) -> &'static str {
    match field {
        Field::Password if show_password => "Password (Hide)",
        Field::Password => "Password (Show)",
        Field::Country => "Country",
        Field::City => "City",
        _ => field.placeholder(),
    }
}
