//! Integer-cent money helpers
//!
//! Amounts travel as `i64` cents; forms show them as two-decimal strings.

/// Parse a human-entered amount into cents.
///
/// Accepts an optional leading `-`, an optional `$`, thousands separators (`,`) and
/// at most two fraction digits: `"1,234.56"` → `123456`, `"17"` → `1700`.
/// Returns `None` for anything else, including overflow.
pub fn parse_cents(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let fraction_value: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    let cents = whole_value.checked_mul(100)?.checked_add(fraction_value)?;
    Some(if negative { -cents } else { cents })
}

/// Render cents as a plain two-decimal string (`1700` → `"17.00"`).
///
/// The output is accepted by both [`parse_cents`] and the currency sanitizer.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
