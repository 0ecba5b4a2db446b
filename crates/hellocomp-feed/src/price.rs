//! Czech price-string handling, isolated so the locale rules stay out of
//! the general numeric types.
//!
//! `parse_price` is a best-effort coercion over untrusted feed data and
//! documents its failure-to-zero contract; `format_czk` is integer-
//! truncating by design, matching the retailer's whole-crown display
//! convention. Round-tripping does not recover fractional cents.

/// Parses a locale-formatted price like `"12 990,00"` into a number.
///
/// Strips ASCII and non-breaking spaces (thousands separators), replaces
/// the comma decimal separator with a period, and parses as `f64`.
/// Returns `0.0` on empty input or any parse failure — never an error.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Formats a numeric price for display: `12990.0` → `"12 990 Kč"`.
///
/// Zero formats as the empty string (no price shown for unpriced items).
/// The fractional part is truncated, digits are grouped in thousands with
/// single ASCII spaces.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_czk(price: f64) -> String {
    if price == 0.0 {
        return String::new();
    }
    let whole = price.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}{grouped} Kč")
}
