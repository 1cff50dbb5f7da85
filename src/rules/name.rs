//! Name rule - letters and spaces, 3 to 50 characters.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, RuleResult, char_len};

pub(crate) const MIN_LENGTH: usize = 3;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{3,50}$").expect("valid regex"));

/// Checks a trimmed name value.
///
/// # Returns
/// - `Some(Rule::Required)` if the value is empty
/// - `Some(Rule::TooShort)` if it has fewer than 3 characters
/// - `Some(Rule::LettersAndSpacesOnly)` if it has other characters or exceeds 50
/// - `None` if the name is acceptable
pub fn name_rule(value: &str) -> RuleResult {
    if value.is_empty() {
        return Some(Rule::Required);
    }
    if char_len(value) < MIN_LENGTH {
        return Some(Rule::TooShort);
    }
    if !NAME_RE.is_match(value) {
        return Some(Rule::LettersAndSpacesOnly);
    }
    None
}
