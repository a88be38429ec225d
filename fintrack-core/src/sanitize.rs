//! Keystroke sanitizers for monetary and percentage inputs.
//!
//! Both functions run synchronously on every keystroke. `None` means the keystroke
//! is discarded and the input keeps its previous value.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static CURRENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{0,2})?$").expect("literal pattern"));

#[allow(clippy::expect_used)]
static PERCENTAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d*)?$").expect("literal pattern"));

/// Clean a raw currency keystroke into `\d+(\.\d{0,2})?`.
///
/// 1. Keep only digits and `.`.
/// 2. Reject more than one `.`.
/// 3. Truncate to two fraction digits.
/// 4. Drop redundant leading zeros (`"0100"` → `"100"`, `"0.5"` is kept).
/// 5. Reject a non-empty result that does not match the canonical pattern.
///
/// An empty result is accepted so a field can be cleared.
pub fn clean_currency_input(raw: &str) -> Option<String> {
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.matches('.').count() > 1 {
        return None;
    }

    if let Some(dot) = cleaned.find('.') {
        cleaned.truncate((dot + 3).min(cleaned.len()));
    }

    // A zero is redundant when another digit follows it directly.
    let redundant = cleaned
        .char_indices()
        .take_while(|(i, c)| {
            *c == '0'
                && cleaned[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|next| next.is_ascii_digit())
        })
        .count();
    cleaned.drain(..redundant);

    if !cleaned.is_empty() && !CURRENCY_PATTERN.is_match(&cleaned) {
        return None;
    }
    Some(cleaned)
}

/// Clean a raw percentage keystroke into `-?\d+(\.\d*)?` within `[-100, 100]`.
pub fn clean_percentage_input(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if !PERCENTAGE_PATTERN.is_match(&cleaned) {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    if !(-100.0..=100.0).contains(&value) {
        return None;
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    // ---- currency ----

    #[test]
    fn currency_strips_non_numeric() {
        assert_eq!(clean_currency_input("$1,234.5"), some("1234.5"));
        assert_eq!(clean_currency_input("12a3"), some("123"));
    }

    #[test]
    fn currency_rejects_multiple_dots() {
        for raw in ["1.2.3", "..", "0..", "1.00.", "$1.5.0"] {
            assert_eq!(clean_currency_input(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn currency_truncates_fraction() {
        assert_eq!(clean_currency_input("1.239"), some("1.23"));
        assert_eq!(clean_currency_input("0.999"), some("0.99"));
    }

    #[test]
    fn currency_drops_leading_zero() {
        assert_eq!(clean_currency_input("0100"), some("100"));
        assert_eq!(clean_currency_input("05"), some("5"));
        assert_eq!(clean_currency_input("0.5"), some("0.5"));
        assert_eq!(clean_currency_input("0"), some("0"));
        assert_eq!(clean_currency_input("00.5"), some("0.5"));
    }

    #[test]
    fn currency_rejects_bare_dot() {
        assert_eq!(clean_currency_input("."), None);
        assert_eq!(clean_currency_input(".5"), None);
    }

    #[test]
    fn currency_accepts_empty() {
        assert_eq!(clean_currency_input(""), some(""));
        assert_eq!(clean_currency_input("abc"), some(""));
    }

    #[test]
    fn currency_is_idempotent() {
        let inputs = [
            "0", "0100", "12.3", "12.34", "12.345", "$9,999.99", "007", "5.", "0.0", "1e5",
        ];
        for raw in inputs {
            if let Some(once) = clean_currency_input(raw) {
                assert_eq!(clean_currency_input(&once), Some(once.clone()), "input {raw:?}");
            }
        }
    }

    #[test]
    fn currency_canonical_strings_are_fixed_points() {
        for s in ["0", "1", "10", "100.5", "3.14", "42.", "0.01"] {
            assert_eq!(clean_currency_input(s), some(s));
        }
    }

    // ---- percentage ----

    #[test]
    fn percentage_accepts_range() {
        assert_eq!(clean_percentage_input("100"), some("100"));
        assert_eq!(clean_percentage_input("-100"), some("-100"));
        assert_eq!(clean_percentage_input("4.25"), some("4.25"));
        assert_eq!(clean_percentage_input("4."), some("4."));
        assert_eq!(clean_percentage_input("4.5%"), some("4.5"));
    }

    #[test]
    fn percentage_rejects_out_of_range() {
        assert_eq!(clean_percentage_input("100.01"), None);
        assert_eq!(clean_percentage_input("-101"), None);
        assert_eq!(clean_percentage_input("250"), None);
    }

    #[test]
    fn percentage_rejects_malformed() {
        assert_eq!(clean_percentage_input(""), None);
        assert_eq!(clean_percentage_input("-"), None);
        assert_eq!(clean_percentage_input("1-2"), None);
        assert_eq!(clean_percentage_input("1.2.3"), None);
        assert_eq!(clean_percentage_input(".5"), None);
    }
}
