//! Application state definitions

use super::forms::Field;
use super::navigation::{Router, View};

/// Focus index of the submit button, after every field
pub const SUBMIT_BUTTON_INDEX: usize = Field::ALL.len();

/// Number of focusable elements on the registration view
pub const FOCUS_COUNT: usize = SUBMIT_BUTTON_INDEX + 1;

/// Main application state (everything except the form itself)
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub router: Router,

    // Registration view
    pub active_form_field: usize,
    pub show_password: bool,

    // Status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn current_view(&self) -> View {
        self.router.current_view()
    }

    /// Field under focus, `None` when the submit button has focus
    pub fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_form_field).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_form_field == SUBMIT_BUTTON_INDEX
    }

    /// Move to the next field (wraps around)
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % FOCUS_COUNT;
    }

    /// Move to the previous field (wraps around)
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = FOCUS_COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Reset the registration view for a fresh form
    pub fn reset_form_view(&mut self) {
        self.active_form_field = 0;
        self.status_message = None;
    }
}
