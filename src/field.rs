//! Field kinds recognized by the form.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown form field: {0:?}")]
    Unknown(String),
}

/// One of the four input categories of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Password,
    Mobile,
}

impl FieldKind {
    /// All kinds, in the order they appear on the form.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Mobile,
    ];

    /// Host-side identifier of the field (`"name"`, `"email"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Mobile => "mobile",
        }
    }

    /// Label used when building messages.
    pub(crate) fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
            FieldKind::Mobile => "Mobile number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rejected unknown field identifier: {:?}", id);
                FieldError::Unknown(id.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!("name".parse::<FieldKind>(), Ok(FieldKind::Name));
        assert_eq!("Email".parse::<FieldKind>(), Ok(FieldKind::Email));
        assert_eq!(" PASSWORD ".parse::<FieldKind>(), Ok(FieldKind::Password));
        assert_eq!("mobile".parse::<FieldKind>(), Ok(FieldKind::Mobile));
    }

    #[test]
    fn test_parse_unknown_id() {
        let result = "phone".parse::<FieldKind>();
        assert_eq!(result, Err(FieldError::Unknown("phone".to_string())));
    }

    #[test]
    fn test_display_matches_id() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.to_string().parse::<FieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_error_message() {
        let err = FieldError::Unknown("age".to_string());
        assert_eq!(err.to_string(), "Unknown form field: \"age\"");
    }
}
