//! Registration form validation library
//!
//! This library provides the pure decision logic behind a registration
//! form: per-field rules for name, email, password and mobile number, a
//! password strength score for the live meter, and the all-fields-valid
//! gate for submission. Rendering and event wiring belong to the host.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced, cancellable strength feed
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use form_guard::{FieldKind, StrengthLabel, score, validate};
//!
//! assert!(validate(FieldKind::Email, "you@example.com").is_valid());
//!
//! let result = validate(FieldKind::Mobile, "5876543210");
//! println!("{}", result.message().unwrap_or_default());
//!
//! assert_eq!(score("Ab3xyz9!!!").label, StrengthLabel::Strong);
//! ```

// Internal modules
mod field;
mod form;
mod rules;
mod strength;

// Public API
pub use field::{FieldError, FieldKind};
pub use form::{FormReport, Registration, validate_registration};
pub use rules::{Rule, ValidationResult, Violation, validate, validate_field};
pub use strength::{StrengthLabel, StrengthResult, meter, score, score_secret};

#[cfg(feature = "async")]
pub use strength::{DEBOUNCE, score_tx};
