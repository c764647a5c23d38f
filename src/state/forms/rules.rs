//! Validation rules for the registration form
//!
//! This is the only place a field's validity is decided. Both per-field
//! messages and the overall "can submit" check are derived from
//! [`validate_field`], so the two can never disagree on what a rule means.

use super::field::{Field, FormFields};
use crate::catalog::CityLookup;
use regex::Regex;
use std::sync::LazyLock;

pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_TOO_SHORT: &str = "Min 6 characters";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const COUNTRY_REQUIRED: &str = "Select a country";
pub const CITY_REQUIRED: &str = "Select a city";
pub const CITY_NOT_IN_COUNTRY: &str = "Select a city from the chosen country";
pub const PAN_REQUIRED: &str = "PAN number is required";
pub const AADHAR_LENGTH: &str = "Aadhar must be 12 digits";

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const AADHAR_CHARS: usize = 12;

/// Something, `@`, something, `.`, something; none of it whitespace.
/// Unanchored, so it only has to occur somewhere in the value.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(message)
    } else {
        None
    }
}

/// Check `value` as the candidate for `field`, reading any other field the
/// rule depends on from `fields`.
///
/// Returns the failure message, or `None` when the rule passes.
pub fn check(
    field: Field,
    value: &str,
    fields: &FormFields,
    lookup: &dyn CityLookup,
) -> Option<&'static str> {
    match field {
        Field::FirstName => required(value, FIRST_NAME_REQUIRED),
        Field::LastName => required(value, LAST_NAME_REQUIRED),
        Field::Username => required(value, USERNAME_REQUIRED),
        Field::Email => (!EMAIL_PATTERN.is_match(value)).then_some(INVALID_EMAIL),
        Field::Password => {
            (value.chars().count() < MIN_PASSWORD_CHARS).then_some(PASSWORD_TOO_SHORT)
        }
        Field::PhoneCode | Field::PhoneNumber => {
            let (code, number) = if field == Field::PhoneCode {
                (value, fields.get(Field::PhoneNumber))
            } else {
                (fields.get(Field::PhoneCode), value)
            };
            (code.trim().is_empty() || number.trim().is_empty()).then_some(PHONE_REQUIRED)
        }
        Field::Country => value.is_empty().then_some(COUNTRY_REQUIRED),
        Field::City => {
            if value.is_empty() {
                Some(CITY_REQUIRED)
            } else if !lookup.has_city(fields.get(Field::Country), value) {
                Some(CITY_NOT_IN_COUNTRY)
            } else {
                None
            }
        }
        Field::Pan => required(value, PAN_REQUIRED),
        Field::Aadhar => (value.chars().count() != AADHAR_CHARS).then_some(AADHAR_LENGTH),
    }
}

/// Error message for `field` given the candidate `value` ("" when valid)
pub fn validate_field(
    field: Field,
    value: &str,
    fields: &FormFields,
    lookup: &dyn CityLookup,
) -> String {
    check(field, value, fields, lookup)
        .unwrap_or_default()
        .to_string()
}

/// Fields whose rule fails for the values currently in `fields`
pub fn failing_fields<'a>(
    fields: &'a FormFields,
    lookup: &'a dyn CityLookup,
) -> impl Iterator<Item = Field> + 'a {
    fields
        .iter()
        .filter(move |(field, value)| check(*field, value, fields, lookup).is_some())
        .map(|(field, _)| field)
}

/// Whether every rule passes for the values currently in `fields`
pub fn all_rules_pass(fields: &FormFields, lookup: &dyn CityLookup) -> bool {
    failing_fields(fields, lookup).next().is_none()
}
