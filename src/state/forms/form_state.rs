//! Registration form state and submission gate

use super::errors::{ErrorKey, ErrorMap};
use super::field::{Field, FormFields};
use super::rules;
use crate::catalog::CityLookup;
use crate::state::navigation::{Navigator, View};
use crate::state::result_view::SubmissionPayload;
use std::rc::Rc;

/// Lifecycle of a form. Only a successful submit leaves `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// What changed in the last state update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormChange {
    /// A field value was stored and its rule re-run
    FieldUpdated(Field),
    /// Submit found failing rules; errors are up to date
    SubmitRejected,
    /// The payload was handed to the navigator
    Submitted,
}

/// Receives a notification after every state update of a form
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver {
    fn state_changed(&mut self, change: &FormChange);
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Error keys holding a message after re-validation
    Rejected { failing: Vec<ErrorKey> },
    /// The form was already submitted; nothing happened
    AlreadySubmitted,
}

/// Owns the registration values and their error messages
pub struct FormController {
    fields: FormFields,
    errors: ErrorMap,
    phase: FormPhase,
    lookup: Rc<dyn CityLookup>,
    observers: Vec<Box<dyn FormObserver>>,
}

impl FormController {
    pub fn new(lookup: Rc<dyn CityLookup>) -> Self {
        Self {
            fields: FormFields::default(),
            errors: ErrorMap::default(),
            phase: FormPhase::Editing,
            lookup,
            observers: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Message shown under `field` ("" when none)
    pub fn error_for(&self, field: Field) -> &str {
        self.errors.get(field.error_key())
    }

    /// Country options, in catalog order
    pub fn countries(&self) -> Vec<String> {
        self.lookup.countries()
    }

    /// City options for the currently selected country
    pub fn city_options(&self) -> Vec<String> {
        self.lookup.cities(self.fields.get(Field::Country))
    }

    /// Register an observer notified after every `set_field` and `submit`
    pub fn subscribe(&mut self, observer: Box<dyn FormObserver>) {
        self.observers.push(observer);
    }

    /// Store `value` for `field` and re-run that field's rule against the
    /// updated values. Other fields keep their messages.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.phase == FormPhase::Submitted {
            tracing::debug!("Ignoring {} update on submitted form", field.key());
            return;
        }

        self.fields.set(field, value);
        let message = self.validate_field(field, self.fields.get(field), &self.fields);
        tracing::debug!(
            field = field.key(),
            error = message.as_str(),
            "Field updated"
        );
        self.errors.set(field.error_key(), message);
        self.notify(FormChange::FieldUpdated(field));
    }

    /// Error message for `value` as the candidate of `field`, evaluated
    /// against `fields` ("" when the rule passes)
    pub fn validate_field(&self, field: Field, value: &str, fields: &FormFields) -> String {
        rules::validate_field(field, value, fields, self.lookup.as_ref())
    }

    /// True when every rule passes for the live values and no message is
    /// currently displayed
    pub fn is_valid(&self) -> bool {
        rules::all_rules_pass(&self.fields, self.lookup.as_ref()) && self.errors.is_clear()
    }

    /// Re-validate every field, then hand a copy of the values to
    /// `navigator` if the form is valid
    pub fn submit(&mut self, navigator: &mut dyn Navigator) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            tracing::debug!("Ignoring submit on submitted form");
            return SubmitOutcome::AlreadySubmitted;
        }

        let snapshot = self.fields.clone();
        for field in Field::ALL {
            let message = self.validate_field(field, snapshot.get(field), &snapshot);
            self.errors.set(field.error_key(), message);
        }

        if !self.is_valid() {
            let failing: Vec<ErrorKey> = self.errors.failing().map(|(key, _)| key).collect();
            tracing::info!(
                "Submit rejected: {}",
                failing
                    .iter()
                    .map(|key| key.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            self.notify(FormChange::SubmitRejected);
            return SubmitOutcome::Rejected { failing };
        }

        self.phase = FormPhase::Submitted;
        tracing::info!("Registration submitted");
        navigator.navigate(View::Success, Some(SubmissionPayload::from_fields(&snapshot)));
        self.notify(FormChange::Submitted);
        SubmitOutcome::Submitted
    }

    fn notify(&mut self, change: FormChange) {
        for observer in &mut self.observers {
            observer.state_changed(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CountryCatalog, CountryEntry};
    use crate::state::navigation::MockNavigator;
    use mockall::predicate::{always, eq, function};
    use pretty_assertions::assert_eq;

    fn controller() -> FormController {
        FormController::new(Rc::new(CountryCatalog::builtin()))
    }

    fn fill_valid(form: &mut FormController) {
        form.set_field(Field::FirstName, "Ann");
        form.set_field(Field::LastName, "Lee");
        form.set_field(Field::Username, "annlee");
        form.set_field(Field::Email, "a@b.co");
        form.set_field(Field::Password, "secret1");
        form.set_field(Field::PhoneCode, "+1");
        form.set_field(Field::PhoneNumber, "5551234");
        form.set_field(Field::Country, "India");
        form.set_field(Field::City, "Mumbai");
        form.set_field(Field::Pan, "ABCDE1234F");
        form.set_field(Field::Aadhar, "123456789012");
    }

    fn unused_navigator() -> MockNavigator {
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().never();
        navigator
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty_and_error_free() {
            let form = controller();
            assert_eq!(form.phase(), FormPhase::Editing);
            assert_eq!(form.fields(), &FormFields::default());
            assert!(form.errors().is_clear());
            assert!(!form.is_valid());
        }

        #[test]
        fn test_stores_value_and_validates_it() {
            let mut form = controller();
            form.set_field(Field::Email, "nope");
            assert_eq!(form.value(Field::Email), "nope");
            assert_eq!(form.error_for(Field::Email), rules::INVALID_EMAIL);

            form.set_field(Field::Email, "a@b.co");
            assert_eq!(form.error_for(Field::Email), "");
        }

        #[test]
        fn test_only_touched_field_gets_a_message() {
            let mut form = controller();
            form.set_field(Field::Password, "abc");
            let failing: Vec<_> = form.errors().failing().map(|(k, _)| k).collect();
            assert_eq!(failing, vec![ErrorKey::Password]);
        }

        #[test]
        fn test_phone_pair_shares_one_message() {
            let mut form = controller();
            form.set_field(Field::PhoneCode, "+1");
            assert_eq!(form.error_for(Field::PhoneCode), rules::PHONE_REQUIRED);
            assert_eq!(form.error_for(Field::PhoneNumber), rules::PHONE_REQUIRED);

            form.set_field(Field::PhoneNumber, "5551234");
            assert_eq!(form.errors().get(ErrorKey::Phone), "");

            form.set_field(Field::PhoneCode, "  ");
            assert_eq!(form.errors().get(ErrorKey::Phone), rules::PHONE_REQUIRED);
        }

        #[test]
        fn test_city_options_follow_country() {
            let mut form = controller();
            assert!(form.city_options().is_empty());
            form.set_field(Field::Country, "India");
            assert!(form.city_options().contains(&"Mumbai".to_string()));
            assert_eq!(form.countries()[0], "India");
        }

        #[test]
        fn test_country_change_does_not_revalidate_city() {
            let catalog = CountryCatalog::from_entries(vec![
                CountryEntry {
                    country: "A".to_string(),
                    cities: vec!["X".to_string()],
                },
                CountryEntry {
                    country: "B".to_string(),
                    cities: vec!["Y".to_string()],
                },
            ])
            .unwrap();
            let mut form = FormController::new(Rc::new(catalog));

            form.set_field(Field::Country, "A");
            form.set_field(Field::City, "X");
            assert_eq!(form.error_for(Field::City), "");

            form.set_field(Field::Country, "B");
            assert_eq!(form.value(Field::City), "X");
            assert_eq!(form.error_for(Field::City), "");
            assert_eq!(
                form.validate_field(Field::City, "X", form.fields()),
                rules::CITY_NOT_IN_COUNTRY
            );

            form.set_field(Field::City, "X");
            assert_eq!(form.error_for(Field::City), rules::CITY_NOT_IN_COUNTRY);
            form.set_field(Field::City, "Y");
            assert_eq!(form.error_for(Field::City), "");
        }

        #[test]
        fn test_stale_city_blocks_is_valid() {
            let mut form = controller();
            fill_valid(&mut form);
            assert!(form.is_valid());

            form.set_field(Field::Country, "UK");
            assert!(form.errors().is_clear());
            assert!(!form.is_valid());
        }

        #[test]
        fn test_notifies_observers() {
            let mut observer = MockFormObserver::new();
            observer
                .expect_state_changed()
                .with(eq(FormChange::FieldUpdated(Field::Pan)))
                .times(1)
                .return_const(());

            let mut form = controller();
            form.subscribe(Box::new(observer));
            form.set_field(Field::Pan, "ABCDE1234F");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_hands_payload_to_navigator() {
            let mut form = controller();
            fill_valid(&mut form);
            let expected = SubmissionPayload::from_fields(form.fields());

            let mut navigator = MockNavigator::new();
            navigator
                .expect_navigate()
                .with(eq(View::Success), eq(Some(expected)))
                .times(1)
                .return_const(());

            assert_eq!(form.submit(&mut navigator), SubmitOutcome::Submitted);
            assert_eq!(form.phase(), FormPhase::Submitted);
        }

        #[test]
        fn test_payload_carries_exactly_the_eleven_values() {
            let mut form = controller();
            fill_valid(&mut form);

            let mut navigator = MockNavigator::new();
            navigator
                .expect_navigate()
                .with(
                    always(),
                    function(|payload: &Option<SubmissionPayload>| {
                        let Some(payload) = payload else {
                            return false;
                        };
                        let pairs: Vec<(&str, &str)> = payload.iter().collect();
                        pairs
                            == vec![
                                ("firstName", "Ann"),
                                ("lastName", "Lee"),
                                ("username", "annlee"),
                                ("email", "a@b.co"),
                                ("password", "secret1"),
                                ("phoneCode", "+1"),
                                ("phoneNumber", "5551234"),
                                ("country", "India"),
                                ("city", "Mumbai"),
                                ("pan", "ABCDE1234F"),
                                ("aadhar", "123456789012"),
                            ]
                    }),
                )
                .times(1)
                .return_const(());

            form.submit(&mut navigator);
        }

        #[test]
        fn test_short_aadhar_keeps_editing() {
            let mut form = controller();
            fill_valid(&mut form);
            form.set_field(Field::Aadhar, "12345");

            let mut navigator = unused_navigator();
            let outcome = form.submit(&mut navigator);

            assert_eq!(
                outcome,
                SubmitOutcome::Rejected {
                    failing: vec![ErrorKey::Aadhar]
                }
            );
            assert_eq!(form.phase(), FormPhase::Editing);
            assert_eq!(form.error_for(Field::Aadhar), rules::AADHAR_LENGTH);
            for field in Field::ALL.iter().filter(|f| **f != Field::Aadhar) {
                assert_eq!(form.error_for(*field), "", "{field:?}");
            }
        }

        #[test]
        fn test_untouched_fields_are_checked() {
            let mut form = controller();
            form.set_field(Field::FirstName, "Ann");

            let mut navigator = unused_navigator();
            let SubmitOutcome::Rejected { failing } = form.submit(&mut navigator) else {
                panic!("expected rejection");
            };

            assert_eq!(
                failing,
                vec![
                    ErrorKey::LastName,
                    ErrorKey::Username,
                    ErrorKey::Email,
                    ErrorKey::Password,
                    ErrorKey::Phone,
                    ErrorKey::Country,
                    ErrorKey::City,
                    ErrorKey::Pan,
                    ErrorKey::Aadhar,
                ]
            );
            assert_eq!(form.error_for(Field::LastName), rules::LAST_NAME_REQUIRED);
            assert_eq!(form.error_for(Field::City), rules::CITY_REQUIRED);
        }

        #[test]
        fn test_batch_validation_keeps_every_message() {
            let mut form = controller();
            let mut navigator = unused_navigator();
            form.submit(&mut navigator);
            assert_eq!(form.errors().failing().count(), 10);
        }

        #[test]
        fn test_submitted_form_ignores_further_input() {
            let mut form = controller();
            fill_valid(&mut form);

            let mut navigator = MockNavigator::new();
            navigator.expect_navigate().times(1).return_const(());
            form.submit(&mut navigator);

            form.set_field(Field::FirstName, "");
            assert_eq!(form.value(Field::FirstName), "Ann");
            assert_eq!(form.submit(&mut navigator), SubmitOutcome::AlreadySubmitted);
        }

        #[test]
        fn test_notifies_observers_of_outcome() {
            let mut observer = MockFormObserver::new();
            observer
                .expect_state_changed()
                .with(eq(FormChange::SubmitRejected))
                .times(1)
                .return_const(());

            let mut form = controller();
            form.subscribe(Box::new(observer));
            let mut navigator = unused_navigator();
            form.submit(&mut navigator);
        }

        #[test]
        fn test_notifies_observers_of_success() {
            let mut form = controller();
            fill_valid(&mut form);

            let mut observer = MockFormObserver::new();
            observer
                .expect_state_changed()
                .with(eq(FormChange::Submitted))
                .times(1)
                .return_const(());
            form.subscribe(Box::new(observer));

            let mut navigator = MockNavigator::new();
            navigator.expect_navigate().times(1).return_const(());
            assert_eq!(form.submit(&mut navigator), SubmitOutcome::Submitted);
        }
    }
}
