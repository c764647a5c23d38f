//! View routing

use super::result_view::SubmissionPayload;

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Registration form being edited
    #[default]
    Registration,
    /// Submitted data listing
    Success,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "Registration Form",
            Self::Success => "Submitted Data",
        }
    }
}

/// Routing collaborator: switches view, optionally carrying a payload
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, view: View, payload: Option<SubmissionPayload>);
}

/// In-process router holding the current view and the payload it was
/// entered with
#[derive(Debug, Clone, Default)]
pub struct Router {
    current_view: View,
    payload: Option<SubmissionPayload>,
}

impl Router {
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Payload handed over on the last navigation, if any
    pub fn payload(&self) -> Option<&SubmissionPayload> {
        self.payload.as_ref()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, view: View, payload: Option<SubmissionPayload>) {
        tracing::info!(
            "Navigating {:?} -> {:?} (payload: {})",
            self.current_view,
            view,
            payload.is_some()
        );
        self.current_view = view;
        self.payload = payload;
    }
}
