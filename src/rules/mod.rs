//! Validation rules
//!
//! Each field kind has its own ordered list of checks; the first failing
//! check decides the reason reported back to the form.

mod email;
mod mobile;
mod name;
mod password;

use std::fmt;

use crate::field::{FieldError, FieldKind};

pub use email::email_rule;
pub use mobile::mobile_rule;
pub use name::name_rule;
pub use password::password_rule;

/// Result type for per-kind rule functions.
/// - `Some(rule)` - the named check failed
/// - `None` - every check passed
pub type RuleResult = Option<Rule>;

/// The individual check that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    TooShort,
    LettersAndSpacesOnly,
    EmailFormat,
    LetterAndDigit,
    DigitsOnly,
    ExactLength,
    MobilePrefix,
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    pub field: FieldKind,
    pub rule: Rule,
}

impl Violation {
    /// Human-readable reason shown next to the field.
    pub fn message(&self) -> String {
        match self.rule {
            Rule::Required => format!("{} is required.", self.field.label()),
            Rule::TooShort => format!(
                "{} must be at least {} characters.",
                self.field.label(),
                min_length(self.field)
            ),
            Rule::LettersAndSpacesOnly => "Only letters and spaces allowed.".to_string(),
            Rule::EmailFormat => "Enter a valid email (e.g. you@example.com).".to_string(),
            Rule::LetterAndDigit => "Include at least one letter and one number.".to_string(),
            Rule::DigitsOnly => "Only digits allowed.".to_string(),
            Rule::ExactLength => format!(
                "{} must be exactly {} digits.",
                self.field.label(),
                mobile::MOBILE_LENGTH
            ),
            Rule::MobilePrefix => {
                "Enter a valid Indian mobile number (starts with 6-9).".to_string()
            }
        }
    }
}

fn min_length(field: FieldKind) -> usize {
    match field {
        FieldKind::Name => name::MIN_LENGTH,
        FieldKind::Password => password::MIN_LENGTH,
        FieldKind::Email | FieldKind::Mobile => 1,
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of validating a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(violation) => Some(violation),
        }
    }

    /// Reason text, or `None` when the value is valid.
    pub fn message(&self) -> Option<String> {
        self.violation().map(Violation::message)
    }
}

/// Validates a raw field value against the rules of its kind.
///
/// Surrounding whitespace is trimmed before any check runs.
pub fn validate(kind: FieldKind, raw: &str) -> ValidationResult {
    let value = raw.trim();

    let rule_fn: fn(&str) -> RuleResult = match kind {
        FieldKind::Name => name_rule,
        FieldKind::Email => email_rule,
        FieldKind::Password => password_rule,
        FieldKind::Mobile => mobile_rule,
    };

    match rule_fn(value) {
        None => ValidationResult::Valid,
        Some(rule) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Field {} rejected by {:?}", kind, rule);
            ValidationResult::Invalid(Violation { field: kind, rule })
        }
    }
}

/// Validates a value for a field given by its host identifier.
///
/// # Errors
///
/// Returns `FieldError::Unknown` when `id` names none of the form's fields.
pub fn validate_field(id: &str, raw: &str) -> Result<ValidationResult, FieldError> {
    let kind: FieldKind = id.parse()?;
    Ok(validate(kind, raw))
}

/// Number of characters in `value`.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
