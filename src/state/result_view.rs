//! Submitted data view model

use super::forms::FormFields;
use super::navigation::{Navigator, View};

/// Fallback shown when the view was entered without a payload
pub const NO_DATA_MESSAGE: &str = "No data submitted.";

/// Label of the control that returns to the form
pub const GO_BACK_LABEL: &str = "Go back";

/// Snapshot of the form values handed over on a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    entries: Vec<(String, String)>,
}

impl SubmissionPayload {
    /// Copy every field value, keyed and ordered like the form
    pub fn from_fields(fields: &FormFields) -> Self {
        let entries = fields
            .iter()
            .map(|(field, value)| (field.key().to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// One labelled row of the submitted data listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub label: String,
    pub value: String,
}

/// What the submitted data view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultContent {
    /// No payload: fallback message and a way back
    NoData,
    /// One entry per payload key, in payload order
    Entries(Vec<ResultEntry>),
}

/// Read-only renderer of a submission payload
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    payload: Option<SubmissionPayload>,
}

impl ResultView {
    pub fn new(payload: Option<SubmissionPayload>) -> Self {
        Self { payload }
    }

    pub fn has_data(&self) -> bool {
        self.payload.is_some()
    }

    pub fn content(&self) -> ResultContent {
        match &self.payload {
            None => ResultContent::NoData,
            Some(payload) => ResultContent::Entries(
                payload
                    .iter()
                    .map(|(key, value)| ResultEntry {
                        label: display_label(key),
                        value: value.to_string(),
                    })
                    .collect(),
            ),
        }
    }

    /// Ask the router for the registration form, carrying nothing
    pub fn go_back(&self, navigator: &mut dyn Navigator) {
        navigator.navigate(View::Registration, None);
    }
}

/// Payload key as a display label: a space before every uppercase letter
/// after the first character ("phoneNumber" -> "phone Number")
pub fn display_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 2);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label
}
