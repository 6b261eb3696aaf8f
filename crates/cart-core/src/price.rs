//! Price parsing and display.
//!
//! Prices are plain `f64` amounts in the store currency. Totals are summed
//! in floating point; only display rounds to cents.

use crate::error::CartError;

/// Default currency symbol used for display.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Check that a price is usable: finite and not negative.
pub fn validate_price(price: f64) -> Result<f64, CartError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(CartError::InvalidPrice(price))
    }
}

/// Parse a price typed by a user or read from markup.
///
/// Accepts an optional leading currency symbol and `,` thousands
/// separators: `"1,250.50"`, `"$99"`, `" 12 "`.
///
/// ```
/// use cart_core::price::parse_price;
/// assert_eq!(parse_price("$1,250.50").unwrap(), 1250.5);
/// ```
pub fn parse_price(text: &str) -> Result<f64, CartError> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let price: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| CartError::UnparseablePrice(text.to_string()))?;
    validate_price(price)
}

/// Format an amount with thousands separators, dropping `.00`.
///
/// ```
/// use cart_core::price::format_amount;
/// assert_eq!(format_amount(1234.0), "1,234");
/// assert_eq!(format_amount(49.9), "49.90");
/// ```
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "NaN".to_string();
    }
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        frac => format!("{}{}.{:02}", sign, whole, frac),
    }
}

/// Format an amount prefixed with a currency symbol (e.g. `"$1,234"`).
pub fn format_price(amount: f64, symbol: &str) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-{}{}", symbol, abs),
        None => format!("{}{}", symbol, formatted),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_price("49.99").unwrap(), 49.99);
        assert_eq!(parse_price(" 12 ").unwrap(), 12.0);
    }

    #[test]
    fn test_parse_symbol_and_separators() {
        assert_eq!(parse_price("$1,250.50").unwrap(), 1250.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_price("twelve"),
            Err(CartError::UnparseablePrice(_))
        ));
        assert!(matches!(parse_price(""), Err(CartError::UnparseablePrice(_))));
    }

    #[test]
    fn test_parse_rejects_negative_and_nan() {
        assert!(matches!(parse_price("-5"), Err(CartError::InvalidPrice(_))));
        assert!(matches!(parse_price("NaN"), Err(CartError::InvalidPrice(_))));
        assert!(matches!(parse_price("inf"), Err(CartError::InvalidPrice(_))));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(200.0, "$"), "$200");
        assert_eq!(format_price(-15.5, "$"), "-$15.50");
        assert_eq!(format_price(2500.0, "\u{20ac}"), "\u{20ac}2,500");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_amount(f64::NAN), "NaN");
    }
}
