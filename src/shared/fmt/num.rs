//! Number formatting for human-readable display.
//!
//! Monetary values arrive as `Decimal`, chart/sparkline values as `f64`;
//! both render with thousands separators and trimmed trailing zeros.

use crate::shared::Currency;
use rust_decimal::Decimal;

/// Trims trailing zeros, adds thousands separators.
fn with_separators(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (number, fraction) = match trimmed.split_once('.') {
        Some((n, f)) => (n, Some(f)),
        None => (trimmed.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Decimal places for an f64 value: whole numbers above 100, two places in
/// the unit range, and enough leading precision for sub-unit coin prices.
fn decimal_places(value: f64) -> usize {
    let abs = value.abs();

    if abs >= 100.0 {
        return 0;
    }
    if abs >= 1.0 || abs == 0.0 {
        return 2;
    }

    let exponent = abs.log10().floor().abs() as usize;
    (exponent + 2).min(8)
}

/// Format an f64 for display with auto-detected decimal places.
pub fn display(amount: f64) -> String {
    display_with_decimals(amount, decimal_places(amount))
}

/// Format an f64 for display with explicit decimal places.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    with_separators(format!("{:.1$}", amount, decimals))
}

/// Format a `Decimal` for display.
pub fn decimal(amount: &Decimal) -> String {
    with_separators(amount.normalize().to_string())
}

/// Format a monetary amount with its currency symbol (e.g. `$1,234.5`).
pub fn currency(amount: &Decimal, currency: Currency) -> String {
    if amount.is_sign_negative() {
        format!("-{}{}", currency.symbol(), decimal(&amount.abs()))
    } else {
        format!("{}{}", currency.symbol(), decimal(amount))
    }
}

/// Format a 24h change percentage with an explicit sign (e.g. `+1.23%`).
pub fn signed_percent(value: &Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded.is_sign_negative() {
        format!("{}%", rounded)
    } else {
        format!("+{}%", rounded)
    }
}
