//! Form domain layer
//!
//! Field values, the rule table, per-field messages and the controller
//! that gates submission.

mod errors;
mod field;
mod form_state;
mod rules;

pub use field::{Field, FieldKind, FormFields};
pub use form_state::{FormChange, FormController, FormObserver, FormPhase, SubmitOutcome};

