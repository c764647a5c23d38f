//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view() {
        View::Registration => forms::draw_registration(frame, main_area, app),
        View::Success => success::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryCatalog;
    use crate::config::TuiConfig;
    use crate::state::{Field, Navigator};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::rc::Rc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 26)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn create_app() -> App {
        App::new(&TuiConfig::default(), Rc::new(CountryCatalog::builtin()))
    }

    #[test]
    fn test_registration_screen_has_status_bar() {
        let app = create_app();
        let screen = render(&app);
        assert!(screen.contains("Registration Form"));
        assert!(screen.contains("^C:quit"));
    }

    #[test]
    fn test_success_screen_lists_submitted_data() {
        let mut app = create_app();
        for (field, value) in [
            (Field::FirstName, "Ann"),
            (Field::LastName, "Lee"),
            (Field::Username, "annlee"),
            (Field::Email, "a@b.co"),
            (Field::Password, "secret1"),
            (Field::PhoneCode, "+1"),
            (Field::PhoneNumber, "5551234"),
            (Field::Country, "India"),
            (Field::City, "Mumbai"),
            (Field::Pan, "ABCDE1234F"),
            (Field::Aadhar, "123456789012"),
        ] {
            app.form.set_field(field, value);
        }
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        let screen = render(&app);
        assert!(screen.contains("Submitted Data"));
        assert!(screen.contains("Phone Number"));
        assert!(screen.contains("5551234"));
        assert!(screen.contains("Mumbai"));
    }

    #[test]
    fn test_success_screen_without_payload() {
        let mut app = create_app();
        app.state.router.navigate(View::Success, None);

        let screen = render(&app);
        assert!(screen.contains("No data submitted."));
        assert!(screen.contains("Go back"));
    }
}
