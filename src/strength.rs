//! Password strength scoring - additive heuristic over character classes.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Delay applied by [`score_tx`] before scoring, so fast typing only
/// produces one result.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Qualitative strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Fill color used by the strength meter for this band.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#f7546a",
            StrengthLabel::Fair => "#f7a254",
            StrengthLabel::Good => "#f7e254",
            StrengthLabel::Strong => "#22d3a5",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }

    fn from_score(score: u8) -> Self {
        match score {
            0..=1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    /// Meter fill percentage for this band.
    fn display_weight(self) -> u8 {
        match self {
            StrengthLabel::Weak => 25,
            StrengthLabel::Fair => 50,
            StrengthLabel::Good => 72,
            StrengthLabel::Strong => 100,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthResult {
    pub label: StrengthLabel,
    /// Number of satisfied criteria, `0..=5`.
    pub severity_score: u8,
    /// Meter fill percentage, `0..=100`.
    pub display_weight: u8,
}

/// Scores a password.
///
/// One point each for: at least 6 characters, at least 10 characters, an
/// uppercase letter, a digit, and a character that is neither an ASCII
/// letter nor a digit. The input is not trimmed.
pub fn score(password: &str) -> StrengthResult {
    let len = password.chars().count();

    let criteria = [
        len >= 6,
        len >= 10,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let severity_score = criteria.iter().filter(|&&met| met).count() as u8;

    let label = StrengthLabel::from_score(severity_score);
    StrengthResult {
        label,
        severity_score,
        display_weight: label.display_weight(),
    }
}

/// Scores a password held as a secret.
pub fn score_secret(password: &SecretString) -> StrengthResult {
    score(password.expose_secret())
}

/// Strength to show on the meter, or `None` when the field is empty and the
/// meter should be hidden.
pub fn meter(password: &SecretString) -> Option<StrengthResult> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return None;
    }
    Some(score(pwd))
}

/// Debounced version that sends the strength via channel.
///
/// Waits [`DEBOUNCE`], then scores and sends unless `token` was cancelled in
/// the meantime (typically because a newer keystroke superseded this one).
#[cfg(feature = "async")]
pub async fn score_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("strength scoring is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength scoring cancelled");
        return;
    }

    let result = score_secret(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_score_empty_is_weak() {
        let result = score("");
        assert_eq!(result.severity_score, 0);
        assert_eq!(result.label, StrengthLabel::Weak);
        assert_eq!(result.display_weight, 25);
    }

    #[test]
    fn test_score_letters_and_digits_is_fair() {
        let result = score("abc123");
        assert_eq!(result.severity_score, 2);
        assert_eq!(result.label, StrengthLabel::Fair);
        assert_eq!(result.display_weight, 50);
    }

    #[test]
    fn test_score_all_criteria_is_strong() {
        let result = score("Ab3xyz9!!!");
        assert_eq!(result.severity_score, 5);
        assert_eq!(result.label, StrengthLabel::Strong);
        assert_eq!(result.display_weight, 100);
    }

    #[test]
    fn test_score_good_band() {
        // length >= 6, uppercase, digit
        let result = score("Abc123");
        assert_eq!(result.severity_score, 3);
        assert_eq!(result.label, StrengthLabel::Good);
        assert_eq!(result.display_weight, 72);
    }

    #[test]
    fn test_score_four_is_strong() {
        // length >= 6, length >= 10, uppercase, digit
        let result = score("Abcdefgh12");
        assert_eq!(result.severity_score, 4);
        assert_eq!(result.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_score_single_criterion_is_weak() {
        let result = score("abcdef");
        assert_eq!(result.severity_score, 1);
        assert_eq!(result.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_score_non_ascii_counts_as_special() {
        let result = score("é");
        assert_eq!(result.severity_score, 1);
    }

    #[test]
    fn test_score_is_idempotent() {
        for pwd in ["", "abc123", "Ab3xyz9!!!", "  spaced  "] {
            assert_eq!(score(pwd), score(pwd));
        }
    }

    #[test]
    fn test_score_bounds() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let result = score(pwd);
            assert!(result.severity_score <= 5);
            assert!(result.display_weight <= 100);
        }
    }

    #[test]
    fn test_label_colors_and_names() {
        assert_eq!(StrengthLabel::Weak.color(), "#f7546a");
        assert_eq!(StrengthLabel::Strong.color(), "#22d3a5");
        assert_eq!(StrengthLabel::Good.to_string(), "Good");
    }

    #[test]
    fn test_score_secret_matches_score() {
        assert_eq!(score_secret(&secret("Ab3xyz9!!!")), score("Ab3xyz9!!!"));
    }

    #[test]
    fn test_meter_hides_empty() {
        assert_eq!(meter(&secret("")), None);
        assert_eq!(meter(&secret("abc123")), Some(score("abc123")));
    }
}
