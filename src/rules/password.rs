//! Password rule - at least 6 characters with a letter and a digit.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, RuleResult, char_len};

pub(crate) const MIN_LENGTH: usize = 6;

static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("valid regex"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.{6,}$").expect("valid regex"));

/// Checks a password value.
///
/// # Returns
/// - `Some(Rule::Required)` if the value is empty
/// - `Some(Rule::TooShort)` if it has fewer than 6 characters
/// - `Some(Rule::LetterAndDigit)` if it lacks a letter or a digit
/// - `None` if the password is acceptable
pub fn password_rule(value: &str) -> RuleResult {
    if value.is_empty() {
        return Some(Rule::Required);
    }
    if char_len(value) < MIN_LENGTH {
        return Some(Rule::TooShort);
    }
    let accepted =
        LETTER_RE.is_match(value) && DIGIT_RE.is_match(value) && LENGTH_RE.is_match(value);
    if !accepted {
        return Some(Rule::LetterAndDigit);
    }
    None
}
