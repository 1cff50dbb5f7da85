//! Email rule - `local@domain.tld` with a TLD of at least two characters.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, RuleResult};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("valid regex"));

/// Checks a trimmed email value.
pub fn email_rule(value: &str) -> RuleResult {
    if value.is_empty() {
        return Some(Rule::Required);
    }
    if !EMAIL_RE.is_match(value) {
        return Some(Rule::EmailFormat);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rule_valid() {
        assert_eq!(email_rule("a@b.co"), None);
        assert_eq!(email_rule("you@example.com"), None);
        assert_eq!(email_rule("first.last+tag@mail.example.org"), None);
    }

    #[test]
    fn test_email_rule_missing_tld() {
        assert_eq!(email_rule("a@b"), Some(Rule::EmailFormat));
        assert_eq!(email_rule("a@b.c"), Some(Rule::EmailFormat));
    }

    #[test]
    fn test_email_rule_rejects_whitespace_and_extra_at() {
        assert_eq!(email_rule("a b@c.com"), Some(Rule::EmailFormat));
        assert_eq!(email_rule("a@@c.com"), Some(Rule::EmailFormat));
        assert_eq!(email_rule("@c.com"), Some(Rule::EmailFormat));
    }

    #[test]
    fn test_email_rule_empty() {
        assert_eq!(email_rule(""), Some(Rule::Required));
    }
}
