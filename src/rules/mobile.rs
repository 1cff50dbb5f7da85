//! Mobile rule - Indian 10-digit mobile numbers starting with 6 to 9.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, RuleResult};

pub(crate) const MOBILE_LENGTH: usize = 10;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid regex"));

/// Checks a trimmed mobile number.
///
/// Checks run in order: empty, non-digit characters, length, leading digit.
pub fn mobile_rule(value: &str) -> RuleResult {
    if value.is_empty() {
        return Some(Rule::Required);
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(Rule::DigitsOnly);
    }
    // all ASCII from here, so bytes == chars
    if value.len() != MOBILE_LENGTH {
        return Some(Rule::ExactLength);
    }
    if !MOBILE_RE.is_match(value) {
        return Some(Rule::MobilePrefix);
    }
    None
}
