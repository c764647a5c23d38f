//! Application state and core logic

use crate::catalog::CityLookup;
use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    AppState, Field, FieldKind, FormChange, FormController, FormObserver, FormPhase, ResultView,
    SubmitOutcome, View,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::Cell;
use std::rc::Rc;

/// Shared "something changed, draw again" flag
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    pub fn mark(&self) {
        self.0.set(true);
    }

    /// Return whether a redraw was requested, clearing the request
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl FormObserver for RedrawFlag {
    fn state_changed(&mut self, change: &FormChange) {
        tracing::trace!(?change, "Form state changed");
        self.mark();
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration form being edited
    pub form: FormController,
    /// Country/city source shared with every new form
    lookup: Rc<dyn CityLookup>,
    /// Set by form observers and view changes
    redraw: RedrawFlag,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, lookup: Rc<dyn CityLookup>) -> Self {
        let redraw = RedrawFlag::default();
        redraw.mark();

        let mut form = FormController::new(Rc::clone(&lookup));
        form.subscribe(Box::new(redraw.clone()));

        let state = AppState {
            show_password: config.show_password(),
            ..Default::default()
        };

        Self {
            state,
            form,
            lookup,
            redraw,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the screen needs drawing; clears the request
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.take()
    }

    /// Request a redraw (e.g. after a terminal resize)
    pub fn request_redraw(&self) {
        self.redraw.mark();
    }

    /// View model for the submitted data screen
    pub fn result_view(&self) -> ResultView {
        ResultView::new(self.state.router.payload().cloned())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Track view before handling key to detect navigation
        let view_before = self.state.current_view();

        match view_before {
            View::Registration => self.handle_registration_key(key),
            View::Success => self.handle_success_key(key),
        }

        let view_after = self.state.current_view();
        if view_after != view_before {
            // A submitted form is replaced once the user comes back to it
            if view_after == View::Registration && self.form.phase() == FormPhase::Submitted {
                self.reset_form();
            }
            self.redraw.mark();
        }
    }

    /// Replace the form with a fresh one
    fn reset_form(&mut self) {
        let mut form = FormController::new(Rc::clone(&self.lookup));
        form.subscribe(Box::new(self.redraw.clone()));
        self.form = form;
        self.state.reset_form_view();
    }

    /// Handle keys in the Registration view
    fn handle_registration_key(&mut self, key: KeyEvent) {
        // AltGr arrives as Ctrl+Alt on Windows and must still type
        let shortcut = (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER))
            && !key.modifiers.contains(KeyModifiers::ALT);
        let focused = self.state.focused_field();
        let on_select = focused.is_some_and(|f| f.kind() == FieldKind::Select);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('p') if shortcut => {
                self.state.toggle_password();
                self.redraw.mark();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_form_field();
                self.redraw.mark();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_form_field();
                self.redraw.mark();
            }
            KeyCode::Enter if self.state.is_submit_focused() => self.submit(),
            KeyCode::Enter => {
                self.state.next_form_field();
                self.redraw.mark();
            }
            KeyCode::Esc => self.quit = true,
            // Select inputs cycle through their options
            KeyCode::Left if on_select => self.cycle_focused_option(false),
            KeyCode::Right | KeyCode::Char(' ') if on_select => self.cycle_focused_option(true),
            KeyCode::Char(c) if !shortcut && !on_select => self.input_char(c),
            KeyCode::Backspace if !on_select => self.backspace(),
            _ => {}
        }
    }

    /// Handle keys in the Success view
    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => {
                self.result_view().go_back(&mut self.state.router);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.form.submit(&mut self.state.router) {
            SubmitOutcome::Submitted => {
                let username = self
                    .state
                    .router
                    .payload()
                    .and_then(|payload| payload.get(Field::Username.key()))
                    .unwrap_or_default();
                self.state.status_message = Some(format!("Registered {username}"));
            }
            SubmitOutcome::Rejected { failing } => {
                let noun = if failing.len() == 1 { "field" } else { "fields" };
                self.state.status_message =
                    Some(format!("Fix {} {noun} before submitting", failing.len()));
            }
            SubmitOutcome::AlreadySubmitted => {}
        }
    }

    /// Store an edit; any earlier submit verdict no longer applies
    fn edit_field(&mut self, field: Field, value: String) {
        self.state.status_message = None;
        self.form.set_field(field, value);
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.state.focused_field() {
            let mut value = self.form.value(field).to_string();
            value.push(c);
            self.edit_field(field, value);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.state.focused_field() {
            let mut value = self.form.value(field).to_string();
            if value.pop().is_some() {
                self.edit_field(field, value);
            }
        }
    }

    fn cycle_focused_option(&mut self, forward: bool) {
        let Some(field) = self.state.focused_field() else {
            return;
        };
        let options = match field {
            Field::Country => self.form.countries(),
            Field::City => self.form.city_options(),
            _ => return,
        };

        let current = self.form.value(field);
        let next = cycle_option(&options, current, forward);
        if next != current {
            self.edit_field(field, next);
        }
    }
}

/// Step through `options` preceded by the empty "nothing selected" entry.
/// A value not among the options counts as nothing selected.
fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    let len = options.len() + 1;
    let position = options
        .iter()
        .position(|o| o == current)
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };

    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}
