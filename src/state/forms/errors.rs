//! Per-field validation messages

use std::collections::BTreeMap;

/// Slot a validation message is reported under
///
/// Matches the field names, except that the phone code and number share
/// the single `phone` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    Country,
    City,
    Pan,
    Aadhar,
}

impl ErrorKey {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }
}

/// Error message per key. A key that was never validated reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    messages: BTreeMap<ErrorKey, String>,
}

impl ErrorMap {
    /// Message for `key`, or "" when there is none
    pub fn get(&self, key: ErrorKey) -> &str {
        self.messages.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.messages.insert(key, message.into());
    }

    /// True when no entry holds a message
    pub fn is_clear(&self) -> bool {
        self.messages.values().all(String::is_empty)
    }

    /// Keys that currently hold a message
    pub fn failing(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.messages
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(key, message)| (*key, message.as_str()))
    }
}
