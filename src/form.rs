//! Whole-form validation for the submit action.

use secrecy::{ExposeSecret, SecretString};

use crate::field::FieldKind;
use crate::rules::{ValidationResult, Violation, validate};

/// Raw values of the registration form as typed by the user.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub mobile: String,
}

impl Registration {
    fn value(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Password => self.password.expose_secret(),
            FieldKind::Mobile => &self.mobile,
        }
    }
}

/// Per-field outcome of a submit attempt, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    results: [(FieldKind, ValidationResult); 4],
}

impl FormReport {
    /// `true` when every field passed and the form may be submitted.
    pub fn is_submittable(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_valid())
    }

    pub fn result(&self, kind: FieldKind) -> ValidationResult {
        self.results
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, result)| *result)
            .unwrap_or(ValidationResult::Valid)
    }

    pub fn results(&self) -> impl Iterator<Item = (FieldKind, ValidationResult)> + '_ {
        self.results.iter().copied()
    }

    /// Failing fields only, in form order.
    pub fn violations(&self) -> impl Iterator<Item = Violation> + '_ {
        self.results
            .iter()
            .filter_map(|(_, result)| result.violation().copied())
    }
}

/// Validates every field of the form.
///
/// All fields are checked even after one fails, so each can show its own
/// status.
pub fn validate_registration(form: &Registration) -> FormReport {
    let results = FieldKind::ALL.map(|kind| (kind, validate(kind, form.value(kind))));
    let report = FormReport { results };

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Registration validated: submittable={}, violations={}",
        report.is_submittable(),
        report.violations().count()
    );

    report
}
